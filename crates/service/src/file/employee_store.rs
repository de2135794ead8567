use std::sync::Arc;

use models::{ContactUpdate, Employee, Employees};
use tracing::info;

use crate::errors::ServiceError;
use crate::repository::EmployeeRepository;
use crate::storage::JsonDocumentStore;

const ENTITY: &str = "employee with personal ID";

/// File storage: employees as a JSON array keyed by `PersonalID`.
pub struct EmployeeStore {
    store: JsonDocumentStore<Employees>,
}

impl EmployeeStore {
    pub fn new<P: Into<std::path::PathBuf>>(path: P) -> Arc<Self> {
        Arc::new(Self { store: JsonDocumentStore::new(path) })
    }

    pub fn document(&self) -> &JsonDocumentStore<Employees> {
        &self.store
    }

    pub async fn get(&self) -> Result<Employees, ServiceError> {
        Ok(self.store.load().await?)
    }

    pub async fn add(&self, input: Employee) -> Result<Employee, ServiceError> {
        let added = self
            .store
            .update(|employees| -> Result<Employee, ServiceError> {
                input.validate()?;
                if employees.iter().any(|e| e.personal_id == input.personal_id) {
                    return Err(ServiceError::duplicate(ENTITY, input.personal_id));
                }
                employees.push(input.clone());
                Ok(input.clone())
            })
            .await?;
        info!(personal_id = added.personal_id, "employee added");
        Ok(added)
    }

    pub async fn delete(&self, personal_id: i64) -> Result<(), ServiceError> {
        self.store
            .update(|employees| -> Result<(), ServiceError> {
                let idx = employees
                    .iter()
                    .position(|e| e.personal_id == personal_id)
                    .ok_or_else(|| ServiceError::not_found(ENTITY, personal_id))?;
                employees.remove(idx);
                Ok(())
            })
            .await?;
        info!(personal_id, "employee deleted");
        Ok(())
    }

    /// Overwrite email, phone and address; identity and names stay as stored.
    pub async fn edit_contacts(&self, input: ContactUpdate) -> Result<Employee, ServiceError> {
        let edited = self
            .store
            .update(|employees| -> Result<Employee, ServiceError> {
                let employee = employees
                    .iter_mut()
                    .find(|e| e.personal_id == input.personal_id)
                    .ok_or_else(|| ServiceError::not_found(ENTITY, input.personal_id))?;
                input.validate()?;
                input.apply_to(employee);
                Ok(employee.clone())
            })
            .await?;
        info!(personal_id = edited.personal_id, "employee contacts edited");
        Ok(edited)
    }
}

#[async_trait::async_trait]
impl EmployeeRepository for EmployeeStore {
    async fn get(&self) -> Result<Employees, ServiceError> { self.get().await }
    async fn add(&self, input: Employee) -> Result<Employee, ServiceError> { self.add(input).await }
    async fn delete(&self, personal_id: i64) -> Result<(), ServiceError> { self.delete(personal_id).await }
    async fn edit_contacts(&self, input: ContactUpdate) -> Result<Employee, ServiceError> {
        self.edit_contacts(input).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{employee, temp_json_path};

    const JANE: i64 = 48001010123;

    async fn setup_store() -> Arc<EmployeeStore> {
        let store = EmployeeStore::new(temp_json_path("employees"));
        store.document().ensure_exists().await.expect("store init");
        store
    }

    async fn cleanup(store: &EmployeeStore) {
        let _ = tokio::fs::remove_file(store.document().path()).await;
    }

    fn contacts(personal_id: i64) -> ContactUpdate {
        ContactUpdate {
            personal_id,
            email: "jane.doe@fleet.ee".into(),
            phone_number: "5559999".into(),
            address: "Harbour 22".into(),
        }
    }

    #[tokio::test]
    async fn add_get_and_duplicate() -> Result<(), anyhow::Error> {
        let store = setup_store().await;
        assert_eq!(store.add(employee(JANE)).await?, employee(JANE));
        assert_eq!(store.get().await?, vec![employee(JANE)]);

        let before = tokio::fs::read(store.document().path()).await?;
        assert!(matches!(store.add(employee(JANE)).await, Err(ServiceError::Duplicate(_))));
        assert_eq!(tokio::fs::read(store.document().path()).await?, before);
        cleanup(&store).await;
        Ok(())
    }

    #[tokio::test]
    async fn invalid_employee_rejected() -> Result<(), anyhow::Error> {
        let store = setup_store().await;
        let mut e = employee(JANE);
        e.date_of_birth = "1.1.1980".into();
        assert!(matches!(store.add(e).await, Err(ServiceError::Validation(_))));
        assert!(matches!(store.add(employee(4800101012)).await, Err(ServiceError::Validation(_))));
        assert!(store.get().await?.is_empty());
        cleanup(&store).await;
        Ok(())
    }

    #[tokio::test]
    async fn delete_existing_and_missing() -> Result<(), anyhow::Error> {
        let store = setup_store().await;
        store.add(employee(JANE)).await?;
        store.add(employee(39001010123)).await?;
        store.delete(JANE).await?;
        assert_eq!(store.get().await?, vec![employee(39001010123)]);
        assert!(matches!(store.delete(JANE).await, Err(ServiceError::NotFound(_))));
        cleanup(&store).await;
        Ok(())
    }

    #[tokio::test]
    async fn edit_contacts_leaves_identity_untouched() -> Result<(), anyhow::Error> {
        let store = setup_store().await;
        store.add(employee(JANE)).await?;

        let edited = store.edit_contacts(contacts(JANE)).await?;
        assert_eq!(edited.email, "jane.doe@fleet.ee");
        assert_eq!(edited.phone_number, "5559999");
        assert_eq!(edited.address, "Harbour 22");
        assert_eq!(edited.first_name, "Jane");
        assert_eq!(edited.date_of_birth, "01.01.1980");
        assert_eq!(store.get().await?, vec![edited]);
        cleanup(&store).await;
        Ok(())
    }

    #[tokio::test]
    async fn edit_contacts_errors() -> Result<(), anyhow::Error> {
        let store = setup_store().await;
        store.add(employee(JANE)).await?;

        assert!(matches!(store.edit_contacts(contacts(99999999999)).await, Err(ServiceError::NotFound(_))));

        let mut short = contacts(JANE);
        short.address = "Quay".into();
        assert!(matches!(store.edit_contacts(short).await, Err(ServiceError::Validation(_))));
        assert_eq!(store.get().await?, vec![employee(JANE)]);
        cleanup(&store).await;
        Ok(())
    }
}
