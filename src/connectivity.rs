//! Offline banner state

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectivityStatus {
    Online,
    Offline,
}

impl ConnectivityStatus {
    pub fn from_online(online: bool) -> Self {
        if online {
            ConnectivityStatus::Online
        } else {
            ConnectivityStatus::Offline
        }
    }
}

/// Tracks the last reported network status
#[derive(Debug, Clone)]
pub struct OfflineIndicator {
    status: ConnectivityStatus,
}

impl OfflineIndicator {
    pub fn new(initial: ConnectivityStatus) -> Self {
        Self { status: initial }
    }

    /// Seed from the platform's current network status
    pub fn from_platform() -> Self {
        Self::new(ConnectivityStatus::from_online(crate::platform::is_online()))
    }

    pub fn status(&self) -> ConnectivityStatus {
        self.status
    }

    /// Record a status event. Returns true if the status changed.
    pub fn set_status(&mut self, status: ConnectivityStatus) -> bool {
        if self.status == status {
            return false;
        }
        log::info!("Connectivity changed: {:?} -> {:?}", self.status, status);
        self.status = status;
        true
    }

    pub fn is_banner_visible(&self) -> bool {
        self.status == ConnectivityStatus::Offline
    }
}
