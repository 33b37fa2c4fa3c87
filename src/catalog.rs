use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// One extracurricular activity. The name lives as the map key, not in the
/// record, so the JSON listing comes out as name → record.
#[derive(Clone, Debug, serde::Serialize)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    pub participants: Vec<String>,
}

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum CatalogError {
    #[error("Activity not found")]
    UnknownActivity,
    #[error("Participant not found")]
    UnknownParticipant,
    #[error("Already signed up for this activity")]
    AlreadySignedUp,
}

#[derive(Clone)]
pub struct Catalog {
    inner: Arc<RwLock<BTreeMap<String, Activity>>>,
}

fn activity(
    description: &str,
    schedule: &str,
    max_participants: u32,
    participants: &[&str],
) -> Activity {
    Activity {
        description: description.to_string(),
        schedule: schedule.to_string(),
        max_participants,
        participants: participants.iter().map(|p| p.to_string()).collect(),
    }
}

fn seed() -> BTreeMap<String, Activity> {
    let mut map = BTreeMap::new();
    map.insert(
        "Chess Club".to_string(),
        activity(
            "Learn strategies and compete in chess tournaments",
            "Fridays, 3:30 PM - 5:00 PM",
            12,
            &["michael@mergington.edu", "daniel@mergington.edu"],
        ),
    );
    map.insert(
        "Programming Class".to_string(),
        activity(
            "Learn programming fundamentals and build software projects",
            "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
            20,
            &["emma@mergington.edu", "sophia@mergington.edu"],
        ),
    );
    map.insert(
        "Gym Class".to_string(),
        activity(
            "Physical education and sports activities",
            "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
            30,
            &["john@mergington.edu", "olivia@mergington.edu"],
        ),
    );
    map.insert(
        "Basketball".to_string(),
        activity(
            "Team practice and inter-school basketball games",
            "Wednesdays, 4:00 PM - 5:30 PM",
            15,
            &["liam@mergington.edu"],
        ),
    );
    map.insert(
        "Soccer Team".to_string(),
        activity(
            "Join the school soccer team and compete in local leagues",
            "Tuesdays and Thursdays, 4:00 PM - 5:30 PM",
            22,
            &["noah@mergington.edu"],
        ),
    );
    map.insert(
        "Art Club".to_string(),
        activity(
            "Explore painting, drawing and other visual arts",
            "Thursdays, 3:30 PM - 5:00 PM",
            15,
            &["amelia@mergington.edu"],
        ),
    );
    map.insert(
        "Drama Club".to_string(),
        activity(
            "Acting, stagecraft and two productions per year",
            "Mondays and Wednesdays, 3:30 PM - 5:00 PM",
            20,
            &[],
        ),
    );
    map.insert(
        "Math Olympiad".to_string(),
        activity(
            "Problem-solving practice for regional math competitions",
            "Saturdays, 10:00 AM - 12:00 PM",
            10,
            &[],
        ),
    );
    map
}

impl Catalog {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(seed())),
        }
    }

    pub async fn list(&self) -> BTreeMap<String, Activity> {
        self.inner.read().await.clone()
    }

    /// Appends `email` to the activity's participant list. Duplicate signups
    /// are rejected rather than silently accepted.
    pub async fn signup(&self, name: &str, email: &str) -> Result<(), CatalogError> {
        let mut map = self.inner.write().await;
        let activity = map.get_mut(name).ok_or(CatalogError::UnknownActivity)?;

        if activity.participants.iter().any(|p| p == email) {
            return Err(CatalogError::AlreadySignedUp);
        }

        activity.participants.push(email.to_string());
        Ok(())
    }

    /// Removes `email` from the activity's participant list. Removing an
    /// absent participant is rejected rather than silently accepted.
    pub async fn unregister(&self, name: &str, email: &str) -> Result<(), CatalogError> {
        let mut map = self.inner.write().await;
        let activity = map.get_mut(name).ok_or(CatalogError::UnknownActivity)?;

        let pos = activity
            .participants
            .iter()
            .position(|p| p == email)
            .ok_or(CatalogError::UnknownParticipant)?;

        activity.participants.remove(pos);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn seed_contains_known_activities() {
        let catalog = Catalog::new();
        let map = catalog.list().await;
        for name in ["Chess Club", "Programming Class", "Gym Class", "Basketball"] {
            assert!(map.contains_key(name), "missing seeded activity {name}");
        }
    }

    #[tokio::test]
    async fn signup_appends_in_order() {
        let catalog = Catalog::new();
        catalog.signup("Drama Club", "a@mergington.edu").await.unwrap();
        catalog.signup("Drama Club", "b@mergington.edu").await.unwrap();

        let map = catalog.list().await;
        assert_eq!(
            map["Drama Club"].participants,
            vec!["a@mergington.edu", "b@mergington.edu"]
        );
    }

    #[tokio::test]
    async fn duplicate_signup_rejected() {
        let catalog = Catalog::new();
        catalog.signup("Chess Club", "dup@mergington.edu").await.unwrap();

        let err = catalog
            .signup("Chess Club", "dup@mergington.edu")
            .await
            .unwrap_err();
        assert_eq!(err, CatalogError::AlreadySignedUp);

        let map = catalog.list().await;
        let count = map["Chess Club"]
            .participants
            .iter()
            .filter(|p| *p == "dup@mergington.edu")
            .count();
        assert_eq!(count, 1);
    }

    #[tokio::test]
    async fn signup_unknown_activity() {
        let catalog = Catalog::new();
        let err = catalog
            .signup("Underwater Basket Weaving", "a@mergington.edu")
            .await
            .unwrap_err();
        assert_eq!(err, CatalogError::UnknownActivity);
    }

    #[tokio::test]
    async fn unregister_removes_participant() {
        let catalog = Catalog::new();
        catalog.signup("Math Olympiad", "x@mergington.edu").await.unwrap();
        catalog
            .unregister("Math Olympiad", "x@mergington.edu")
            .await
            .unwrap();

        let map = catalog.list().await;
        assert!(map["Math Olympiad"].participants.is_empty());
    }

    #[tokio::test]
    async fn unregister_absent_participant() {
        let catalog = Catalog::new();
        let err = catalog
            .unregister("Basketball", "nobody@mergington.edu")
            .await
            .unwrap_err();
        assert_eq!(err, CatalogError::UnknownParticipant);

        // state unchanged
        let map = catalog.list().await;
        assert_eq!(map["Basketball"].participants, vec!["liam@mergington.edu"]);
    }

    #[tokio::test]
    async fn unregister_unknown_activity() {
        let catalog = Catalog::new();
        let err = catalog
            .unregister("Nope", "a@mergington.edu")
            .await
            .unwrap_err();
        assert_eq!(err, CatalogError::UnknownActivity);
    }

    #[tokio::test]
    async fn capacity_is_not_enforced() {
        let catalog = Catalog::new();
        // Math Olympiad caps at 10, but the cap is display-only metadata.
        for i in 0..12 {
            catalog
                .signup("Math Olympiad", &format!("student{i}@mergington.edu"))
                .await
                .unwrap();
        }
        let map = catalog.list().await;
        assert_eq!(map["Math Olympiad"].participants.len(), 12);
    }
}
