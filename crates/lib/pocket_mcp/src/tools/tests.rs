//! Tests for the MCP greeting tool.

#[cfg(test)]
mod tests {
    use rmcp::ServerHandler;
    use rmcp::handler::server::wrapper::Parameters;
    use rmcp::model::CallToolResult;
    use serde_json::{Value, json};

    use crate::server::PocketMcpServer;
    use crate::tools::hello::{HelloRequest, greeting_result};

    fn text_of(result: &CallToolResult) -> &str {
        let content = result.content.first().expect("one content item");
        &content.raw.as_text().expect("text content").text
    }

    fn server() -> PocketMcpServer {
        PocketMcpServer::new(pocket_core::hello_world)
    }

    #[test]
    fn server_exposes_single_hello_tool() {
        let tools = PocketMcpServer::list_tools();
        let names: Vec<&str> = tools.iter().map(|t| t.name.as_ref()).collect();
        assert_eq!(names, vec!["hello_world"]);
        assert_eq!(
            tools[0].description.as_deref(),
            Some("Return a hello greeting. Optional input.")
        );
    }

    #[test]
    fn hello_tool_schema_declares_optional_text() {
        let tools = PocketMcpServer::list_tools();
        let schema = Value::Object((*tools[0].input_schema).clone());
        assert!(schema["properties"]["text"].is_object());
        let required = schema.get("required").and_then(Value::as_array);
        assert!(
            required.is_none_or(|r| !r.iter().any(|v| v == "text")),
            "text must not be required: {schema}"
        );
    }

    #[test]
    fn hello_tool_greets_text() {
        let result = server()
            .hello_world(Parameters(HelloRequest {
                text: Some("joe".into()),
            }))
            .expect("tool call");
        assert_ne!(result.is_error, Some(true));
        assert_eq!(text_of(&result), r#"{"greeting":"hello joe"}"#);
    }

    #[test]
    fn hello_tool_defaults_to_world() {
        for text in [None, Some(String::new())] {
            let result = server()
                .hello_world(Parameters(HelloRequest { text }))
                .expect("tool call");
            assert_eq!(text_of(&result), r#"{"greeting":"hello world"}"#);
        }
    }

    #[test]
    fn greeting_result_uses_supplied_greeter() {
        fn shout(text: Option<&str>) -> pocket_core::Greeting {
            pocket_core::Greeting {
                greeting: text.unwrap_or_default().to_uppercase(),
            }
        }
        let result = greeting_result(shout, HelloRequest { text: Some("hi".into()) }).unwrap();
        assert_eq!(text_of(&result), r#"{"greeting":"HI"}"#);
    }

    #[test]
    fn non_string_text_is_rejected() {
        assert!(serde_json::from_value::<HelloRequest>(json!({"text": 5})).is_err());
        assert!(serde_json::from_value::<HelloRequest>(json!({"text": ["a"]})).is_err());
        assert!(serde_json::from_value::<HelloRequest>(json!({})).is_ok());
    }

    #[test]
    fn server_info_enables_tools() {
        let info = server().get_info();
        assert!(info.capabilities.tools.is_some());
        assert!(info.instructions.is_some());
    }
}
