//! Data Model
//!
//! Typed forms of everything that crosses the node and wallet boundaries.

use serde::{Deserialize, Serialize};

/// One to-do item, as stored in the on-chain task table.
///
/// `task_id` is a u64 on chain; the node's REST layer string-encodes u64
/// values, so it stays a string here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub address: String,
    pub completed: bool,
    pub content: String,
    pub task_id: String,
}

/// The account the wallet reports as connected.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WalletAccount {
    pub address: String,
}

/// Envelope every resource read comes wrapped in.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ResourceEnvelope<T> {
    #[serde(rename = "type")]
    pub resource_type: String,
    pub data: T,
}

/// Handle of an on-chain table.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TableHandle {
    pub handle: String,
}

/// The per-account list resource: a task table plus the id counter.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TodoListResource {
    pub tasks: TableHandle,
    pub task_counter: String,
}

impl TodoListResource {
    /// Number of tasks ever created in this list (ids run 1..=count).
    pub fn task_count(&self) -> u64 {
        self.task_counter.parse().unwrap_or(0)
    }
}

/// Body of a table-item lookup.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableItemRequest {
    pub key_type: String,
    pub value_type: String,
    pub key: String,
}

/// Entry-function payload in the injected wallet's submission format.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EntryFunctionPayload {
    #[serde(rename = "type")]
    pub payload_type: &'static str,
    pub function: String,
    pub type_arguments: Vec<String>,
    pub arguments: Vec<String>,
}

/// What the wallet hands back after a successful submission.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PendingTransaction {
    pub hash: String,
}

/// Where a submitted transaction stands on chain.
#[derive(Debug, Clone, PartialEq)]
pub enum TransactionStatus {
    Pending,
    Committed { success: bool, vm_status: String },
}

/// Raw by-hash response; only the fields the status check reads.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TransactionView {
    #[serde(rename = "type")]
    pub transaction_type: String,
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub vm_status: Option<String>,
}

impl TransactionView {
    pub fn status(&self) -> TransactionStatus {
        if self.transaction_type == "pending_transaction" {
            TransactionStatus::Pending
        } else {
            TransactionStatus::Committed {
                success: self.success.unwrap_or(false),
                vm_status: self.vm_status.clone().unwrap_or_default(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_list_resource() {
        let raw = r#"{
            "type": "0xc994::todolist::TodoList",
            "data": {
                "set_task_event": { "counter": "2" },
                "task_counter": "2",
                "tasks": { "handle": "0xabc123" }
            }
        }"#;
        let envelope: ResourceEnvelope<TodoListResource> = serde_json::from_str(raw).unwrap();
        assert_eq!(envelope.data.tasks.handle, "0xabc123");
        assert_eq!(envelope.data.task_count(), 2);
    }

    #[test]
    fn test_decode_task() {
        let raw = r#"{
            "address": "0x1a2b3c",
            "completed": false,
            "content": "Buy milk",
            "task_id": "1"
        }"#;
        let task: Task = serde_json::from_str(raw).unwrap();
        assert_eq!(task.content, "Buy milk");
        assert_eq!(task.task_id, "1");
        assert!(!task.completed);
    }

    #[test]
    fn test_pending_status() {
        let raw = r#"{ "type": "pending_transaction", "hash": "0xdead" }"#;
        let view: TransactionView = serde_json::from_str(raw).unwrap();
        assert_eq!(view.status(), TransactionStatus::Pending);
    }

    #[test]
    fn test_committed_status() {
        let raw = r#"{
            "type": "user_transaction",
            "success": true,
            "vm_status": "Executed successfully"
        }"#;
        let view: TransactionView = serde_json::from_str(raw).unwrap();
        assert_eq!(
            view.status(),
            TransactionStatus::Committed {
                success: true,
                vm_status: "Executed successfully".to_string()
            }
        );
    }

    #[test]
    fn test_payload_wire_format() {
        let payload = EntryFunctionPayload {
            payload_type: "entry_function_payload",
            function: "0xc994::todolist::create_task".to_string(),
            type_arguments: Vec::new(),
            arguments: vec!["Buy milk".to_string()],
        };
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["type"], "entry_function_payload");
        assert_eq!(value["function"], "0xc994::todolist::create_task");
        assert_eq!(value["arguments"][0], "Buy milk");
    }
}
