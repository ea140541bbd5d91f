//! Contract Bindings
//!
//! Payload builders and type names for the on-chain `todolist` module.
//! Every id goes through [`address::canonical`], so all three entry
//! points share one address format.

use crate::address;
use crate::config::AppConfig;
use crate::models::{EntryFunctionPayload, TableItemRequest};

const MODULE_NAME: &str = "todolist";

fn module_id(config: &AppConfig) -> String {
    format!("{}::{}", address::canonical(&config.module_address), MODULE_NAME)
}

/// Fully qualified type of the per-account list resource.
pub fn list_resource_type(config: &AppConfig) -> String {
    format!("{}::TodoList", module_id(config))
}

/// Table-item request for one task by id.
pub fn task_table_item(config: &AppConfig, task_id: u64) -> TableItemRequest {
    TableItemRequest {
        key_type: "u64".to_string(),
        value_type: format!("{}::Task", module_id(config)),
        key: task_id.to_string(),
    }
}

fn entry_function(config: &AppConfig, name: &str, arguments: Vec<String>) -> EntryFunctionPayload {
    EntryFunctionPayload {
        payload_type: "entry_function_payload",
        function: format!("{}::{}", module_id(config), name),
        type_arguments: Vec::new(),
        arguments,
    }
}

/// `create_list()` — no arguments.
pub fn create_list(config: &AppConfig) -> EntryFunctionPayload {
    entry_function(config, "create_list", Vec::new())
}

/// `create_task(content)`.
pub fn create_task(config: &AppConfig, content: &str) -> EntryFunctionPayload {
    entry_function(config, "create_task", vec![content.to_string()])
}

/// `complete_task(task_id)`. The id is a u64, string-encoded on the wire.
pub fn complete_task(config: &AppConfig, task_id: &str) -> EntryFunctionPayload {
    entry_function(config, "complete_task", vec![task_id.to_string()])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Network;

    fn config(module_address: &str) -> AppConfig {
        AppConfig {
            network: Network::Devnet,
            module_address: module_address.to_string(),
        }
    }

    #[test]
    fn test_entry_points_share_one_address_format() {
        // The same canonical prefix no matter how the address is configured
        for addr in ["c994ab", "0xc994ab"] {
            let config = config(addr);
            assert_eq!(create_list(&config).function, "0xc994ab::todolist::create_list");
            assert_eq!(
                create_task(&config, "x").function,
                "0xc994ab::todolist::create_task"
            );
            assert_eq!(
                complete_task(&config, "1").function,
                "0xc994ab::todolist::complete_task"
            );
        }
    }

    #[test]
    fn test_create_task_carries_content() {
        let payload = create_task(&config("c994ab"), "Buy milk");
        assert_eq!(payload.arguments, vec!["Buy milk".to_string()]);
        assert!(payload.type_arguments.is_empty());
    }

    #[test]
    fn test_complete_task_carries_id() {
        let payload = complete_task(&config("c994ab"), "7");
        assert_eq!(payload.arguments, vec!["7".to_string()]);
    }

    #[test]
    fn test_resource_and_table_types() {
        let config = config("c994ab");
        assert_eq!(list_resource_type(&config), "0xc994ab::todolist::TodoList");

        let request = task_table_item(&config, 3);
        assert_eq!(request.key_type, "u64");
        assert_eq!(request.value_type, "0xc994ab::todolist::Task");
        assert_eq!(request.key, "3");
    }
}
