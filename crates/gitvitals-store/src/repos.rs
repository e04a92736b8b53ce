//! Typed repositories over the profile store.

use serde_json::json;
use tracing::info;

use gitvitals_models::{CorrectVitals, PatientRecord, StudentRecord, UserProfile, VitalReading};

use crate::client::StoreClient;
use crate::error::StoreResult;

/// Repository for user profile rows.
pub struct UserRepository {
    client: StoreClient,
}

impl UserRepository {
    /// Create a new user repository.
    pub fn new(client: StoreClient) -> Self {
        Self { client }
    }

    const TABLE: &'static str = "users";

    /// Create the profile row, or merge into an existing one with the same
    /// id. Signup retries after a partial failure land here, so merge
    /// semantics matter.
    pub async fn upsert(&self, profile: &UserProfile) -> StoreResult<UserProfile> {
        let stored = self.client.upsert(Self::TABLE, profile).await?;
        info!("Upserted user profile {}", profile.id);
        Ok(stored)
    }

    /// Look up a profile by auth user id.
    pub async fn find(&self, id: &str) -> StoreResult<Option<UserProfile>> {
        self.client.find_by_id(Self::TABLE, id).await
    }
}

/// Repository for student rows.
pub struct StudentRepository {
    client: StoreClient,
}

impl StudentRepository {
    /// Create a new student repository.
    pub fn new(client: StoreClient) -> Self {
        Self { client }
    }

    const TABLE: &'static str = "students";

    /// Create a student record.
    pub async fn create(&self, student: &StudentRecord) -> StoreResult<StudentRecord> {
        let stored: StudentRecord = self.client.insert(Self::TABLE, student).await?;
        info!(
            "Created student record {} for user {}",
            stored.id.as_deref().unwrap_or("?"),
            student.user_id
        );
        Ok(stored)
    }

    /// Look up a student by record id.
    pub async fn find(&self, id: &str) -> StoreResult<Option<StudentRecord>> {
        self.client.find_by_id(Self::TABLE, id).await
    }
}

/// Repository for patient rows.
pub struct PatientRepository {
    client: StoreClient,
}

impl PatientRepository {
    /// Create a new patient repository.
    pub fn new(client: StoreClient) -> Self {
        Self { client }
    }

    const TABLE: &'static str = "patients";

    /// Create a patient.
    pub async fn create(&self, patient: &PatientRecord) -> StoreResult<PatientRecord> {
        let stored: PatientRecord = self.client.insert(Self::TABLE, patient).await?;
        info!(
            "Created patient {} for user {}",
            stored.id.as_deref().unwrap_or("?"),
            patient.user_id
        );
        Ok(stored)
    }

    /// Look up a patient by id.
    pub async fn find(&self, id: &str) -> StoreResult<Option<PatientRecord>> {
        self.client.find_by_id(Self::TABLE, id).await
    }

    /// Mark a patient's instructor baseline as captured.
    pub async fn set_baseline_flag(&self, id: &str) -> StoreResult<()> {
        self.client
            .update_by_id(Self::TABLE, id, &json!({ "is_baseline_set": true }))
            .await
    }
}

/// Repository for vitals readings and instructor baselines.
pub struct VitalsRepository {
    client: StoreClient,
}

impl VitalsRepository {
    /// Create a new vitals repository.
    pub fn new(client: StoreClient) -> Self {
        Self { client }
    }

    const READINGS_TABLE: &'static str = "vital_readings";
    const CORRECT_TABLE: &'static str = "correct_vitals";

    /// Persist a student's vitals reading.
    pub async fn create_reading(&self, reading: &VitalReading) -> StoreResult<VitalReading> {
        let stored: VitalReading = self.client.insert(Self::READINGS_TABLE, reading).await?;
        info!(
            "Saved reading {} for patient {}",
            reading.reading_number, reading.patient_id
        );
        Ok(stored)
    }

    /// Persist an instructor baseline for a patient.
    pub async fn create_correct_vitals(&self, vitals: &CorrectVitals) -> StoreResult<CorrectVitals> {
        let stored: CorrectVitals = self.client.insert(Self::CORRECT_TABLE, vitals).await?;
        info!("Saved baseline vitals for patient {}", vitals.patient_id);
        Ok(stored)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use gitvitals_models::VitalSigns;
    use wiremock::matchers::{body_partial_json, header, headers, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::client::StoreConfig;

    fn client_for(server: &MockServer) -> StoreClient {
        StoreClient::new(StoreConfig {
            base_url: server.uri(),
            api_key: "svc-key".to_string(),
            timeout: Duration::from_secs(2),
        })
        .unwrap()
    }

    fn profile(id: &str) -> UserProfile {
        UserProfile {
            id: id.to_string(),
            email: "a@b.c".to_string(),
            name: "Alex".to_string(),
            role: "STUDENT".to_string(),
            canvas_id: Some("c-1".to_string()),
            created_at: None,
            updated_at: None,
        }
    }

    #[tokio::test]
    async fn upsert_user_sends_merge_prefer() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/rest/v1/users"))
            .and(header("apikey", "svc-key"))
            .and(headers(
                "prefer",
                vec!["resolution=merge-duplicates", "return=representation"],
            ))
            .and(body_partial_json(json!({"id": "u-1", "role": "STUDENT"})))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!([{
                "id": "u-1", "email": "a@b.c", "name": "Alex", "role": "STUDENT",
                "canvas_id": "c-1"
            }])))
            .mount(&server)
            .await;

        let repo = UserRepository::new(client_for(&server));
        let stored = repo.upsert(&profile("u-1")).await.unwrap();
        assert_eq!(stored.id, "u-1");
    }

    #[tokio::test]
    async fn find_user_maps_empty_result_to_none() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/rest/v1/users"))
            .and(query_param("id", "eq.missing"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(&server)
            .await;

        let repo = UserRepository::new(client_for(&server));
        assert!(repo.find("missing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn set_baseline_flag_patches_by_id() {
        let server = MockServer::start().await;
        Mock::given(method("PATCH"))
            .and(path("/rest/v1/patients"))
            .and(query_param("id", "eq.p-1"))
            .and(body_partial_json(json!({"is_baseline_set": true})))
            .respond_with(ResponseTemplate::new(204))
            .mount(&server)
            .await;

        let repo = PatientRepository::new(client_for(&server));
        repo.set_baseline_flag("p-1").await.unwrap();
    }

    #[tokio::test]
    async fn create_reading_round_trips_row() {
        let server = MockServer::start().await;
        let reading = VitalReading {
            id: None,
            entered_by_id: "u-1".into(),
            entered_by_role: "STUDENT".into(),
            patient_id: "p-1".into(),
            student_id: "s-1".into(),
            reading_number: 2,
            vitals: VitalSigns {
                heart_rate: 70.0,
                blood_pressure_systolic: 118.0,
                blood_pressure_diastolic: 76.0,
                respiratory_rate: 14.0,
                temperature: 98.2,
                oxygen_saturation: 99.0,
            },
            submitted_at: chrono::Utc::now(),
        };

        let mut row = serde_json::to_value(&reading).unwrap();
        row["id"] = json!("r-1");

        Mock::given(method("POST"))
            .and(path("/rest/v1/vital_readings"))
            .and(body_partial_json(json!({"reading_number": 2, "heart_rate": 70.0})))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!([row])))
            .mount(&server)
            .await;

        let repo = VitalsRepository::new(client_for(&server));
        let stored = repo.create_reading(&reading).await.unwrap();
        assert_eq!(stored.id.as_deref(), Some("r-1"));
    }

    #[tokio::test]
    async fn store_rejection_maps_to_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/rest/v1/students"))
            .respond_with(ResponseTemplate::new(409).set_body_string("duplicate key"))
            .mount(&server)
            .await;

        let repo = StudentRepository::new(client_for(&server));
        let err = repo
            .create(&StudentRecord {
                id: None,
                user_id: "u-1".into(),
                student_id: "c-1".into(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, crate::error::StoreError::AlreadyExists(_)));
    }
}
