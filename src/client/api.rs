use reqwest::{Client, Response};
use uuid::Uuid;

use super::error::ClientError;
use crate::task::{CreateTaskRequest, Task, UpdateTaskRequest};

/// Remote side of the task list. Implemented over HTTP by [`HttpTaskApi`].
#[allow(async_fn_in_trait)]
pub trait TaskApi {
    async fn list_tasks(&self) -> Result<Vec<Task>, ClientError>;
    async fn create_task(&self, payload: CreateTaskRequest) -> Result<Task, ClientError>;
    async fn update_task(&self, id: Uuid, payload: UpdateTaskRequest) -> Result<Task, ClientError>;
    async fn delete_task(&self, id: Uuid) -> Result<(), ClientError>;
}

#[derive(Clone)]
pub struct HttpTaskApi {
    client: Client,
    base_url: String,
}

impl HttpTaskApi {
    /// `base_url` points at the `/api` prefix, e.g. `http://127.0.0.1:3000/api`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn tasks_url(&self) -> String {
        format!("{}/tasks", self.base_url)
    }

    fn task_url(&self, id: Uuid) -> String {
        format!("{}/tasks/{}", self.base_url, id)
    }
}

fn ensure_success(response: Response) -> Result<Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(ClientError::Status(status))
    }
}

impl TaskApi for HttpTaskApi {
    async fn list_tasks(&self) -> Result<Vec<Task>, ClientError> {
        let response = self.client.get(self.tasks_url()).send().await?;
        Ok(ensure_success(response)?.json().await?)
    }

    async fn create_task(&self, payload: CreateTaskRequest) -> Result<Task, ClientError> {
        let response = self
            .client
            .post(self.tasks_url())
            .json(&payload)
            .send()
            .await?;
        Ok(ensure_success(response)?.json().await?)
    }

    async fn update_task(&self, id: Uuid, payload: UpdateTaskRequest) -> Result<Task, ClientError> {
        let response = self
            .client
            .put(self.task_url(id))
            .json(&payload)
            .send()
            .await?;
        Ok(ensure_success(response)?.json().await?)
    }

    async fn delete_task(&self, id: Uuid) -> Result<(), ClientError> {
        let response = self.client.delete(self.task_url(id)).send().await?;
        ensure_success(response)?;
        Ok(())
    }
}
