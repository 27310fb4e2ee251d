/// Backend collection a check-in screen reads its roster from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RosterSource {
    /// Every roster record
    All,
    /// Only records with an assigned talk
    TopicAssigned,
}

impl RosterSource {
    /// Backend path for this collection
    pub fn path(&self) -> &'static str {
        match self {
            Self::All => "/api/checkin-details",
            Self::TopicAssigned => "/api/checkin-details/topic/exist",
        }
    }
}
