use crate::error::AppError;
use crate::http;
use crate::model::NewTask;
use reqwest::blocking::Client;

#[derive(Debug)]
pub struct ForwardOutcome {
    pub delivered: Vec<String>,
    pub failures: Vec<ForwardFailure>,
}

#[derive(Debug)]
pub struct ForwardFailure {
    pub description: String,
    pub error: AppError,
}

/// POST each task to the backend, one request per item, in the order the
/// tasks were extracted. A failed delivery is recorded and the remaining
/// items are still attempted; the outer error covers client construction
/// only.
pub fn forward_tasks(tasks: &[String], backend_url: &str) -> Result<ForwardOutcome, AppError> {
    let client = http::client()?;

    let mut delivered = Vec::new();
    let mut failures = Vec::new();

    for task in tasks {
        match deliver_task(&client, backend_url, task) {
            Ok(()) => delivered.push(task.clone()),
            Err(error) => failures.push(ForwardFailure {
                description: task.clone(),
                error,
            }),
        }
    }

    Ok(ForwardOutcome {
        delivered,
        failures,
    })
}

fn deliver_task(client: &Client, backend_url: &str, description: &str) -> Result<(), AppError> {
    let response = client
        .post(backend_url)
        .json(&NewTask::new(description))
        .send()
        .map_err(|err| AppError::http(err.to_string()))?;

    response
        .error_for_status()
        .map_err(|err| AppError::http(err.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::forward_tasks;
    use mockito::Matcher;

    #[test]
    fn posts_one_json_record_per_task() {
        let mut server = mockito::Server::new();
        let first = server
            .mock("POST", "/tasks")
            .match_header("content-type", "application/json")
            .match_body(Matcher::Json(serde_json::json!({"description": "Buy milk"})))
            .with_status(201)
            .create();
        let second = server
            .mock("POST", "/tasks")
            .match_header("content-type", "application/json")
            .match_body(Matcher::Json(serde_json::json!({"description": ""})))
            .with_status(201)
            .create();

        let tasks = vec!["Buy milk".to_string(), String::new()];
        let outcome = forward_tasks(&tasks, &format!("{}/tasks", server.url())).unwrap();

        first.assert();
        second.assert();
        assert_eq!(outcome.delivered, tasks);
        assert!(outcome.failures.is_empty());
    }

    #[test]
    fn failed_delivery_does_not_stop_the_remaining_items() {
        let mut server = mockito::Server::new();
        let ok_before = server
            .mock("POST", "/tasks")
            .match_body(Matcher::Json(serde_json::json!({"description": "first"})))
            .with_status(201)
            .create();
        let broken = server
            .mock("POST", "/tasks")
            .match_body(Matcher::Json(serde_json::json!({"description": "second"})))
            .with_status(500)
            .create();
        let ok_after = server
            .mock("POST", "/tasks")
            .match_body(Matcher::Json(serde_json::json!({"description": "third"})))
            .with_status(201)
            .create();

        let tasks = vec![
            "first".to_string(),
            "second".to_string(),
            "third".to_string(),
        ];
        let outcome = forward_tasks(&tasks, &format!("{}/tasks", server.url())).unwrap();

        ok_before.assert();
        broken.assert();
        ok_after.assert();
        assert_eq!(outcome.delivered, vec!["first", "third"]);
        assert_eq!(outcome.failures.len(), 1);
        assert_eq!(outcome.failures[0].description, "second");
        assert_eq!(outcome.failures[0].error.code(), "http_error");
    }

    #[test]
    fn unreachable_backend_records_every_item_as_failed() {
        let tasks = vec!["a".to_string(), "b".to_string()];
        let outcome = forward_tasks(&tasks, "http://127.0.0.1:1/tasks").unwrap();

        assert!(outcome.delivered.is_empty());
        assert_eq!(outcome.failures.len(), 2);
        assert_eq!(outcome.failures[0].description, "a");
        assert_eq!(outcome.failures[1].description, "b");
    }

    #[test]
    fn empty_task_list_makes_no_requests() {
        let mut server = mockito::Server::new();
        let backend = server.mock("POST", "/tasks").expect(0).create();

        let outcome = forward_tasks(&[], &format!("{}/tasks", server.url())).unwrap();

        backend.assert();
        assert!(outcome.delivered.is_empty());
        assert!(outcome.failures.is_empty());
    }
}
