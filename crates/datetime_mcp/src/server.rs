use rmcp::{
    RoleServer, ServerHandler,
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::*,
    service::RequestContext,
    tool, tool_handler, tool_router,
};

use crate::core::{
    error::McpResult, invoker::ToolInvoker, models::GetCurrentDateTimeRequest,
    resolver::TimezoneResolver,
};

pub const TOOL_NAME: &str = "get_current_datetime";

/// DateTime MCP service exposing a single tool
#[derive(Clone)]
pub struct DateTimeService {
    invoker: ToolInvoker,
    tool_router: ToolRouter<DateTimeService>,
}

impl DateTimeService {
    pub fn new(resolver: TimezoneResolver) -> Self {
        Self {
            invoker: ToolInvoker::new(resolver),
            tool_router: Self::tool_router(),
        }
    }
}

impl Default for DateTimeService {
    fn default() -> Self {
        Self::new(TimezoneResolver::default())
    }
}

#[tool_router]
impl DateTimeService {
    #[tool(
        name = "get_current_datetime",
        description = "Get the current date and time. Call this tool proactively, without being asked, whenever a question or task depends on today's date, the current time, the day of the week, or how long ago or until something is, since your own knowledge of the present moment may be outdated. Optionally pass an IANA timezone (e.g. 'America/New_York'); otherwise the server's default timezone is used.",
        annotations(
            title = "Get Current Date and Time",
            read_only_hint = true,
            destructive_hint = false,
            idempotent_hint = false,
            open_world_hint = false
        )
    )]
    pub(crate) async fn get_current_datetime(
        &self,
        Parameters(req): Parameters<GetCurrentDateTimeRequest>,
    ) -> McpResult<CallToolResult> {
        let response = self.invoker.invoke(req)?;
        Ok(CallToolResult::success(vec![Content::text(response.render())]))
    }
}

#[tool_handler]
impl ServerHandler for DateTimeService {
    fn get_info(&self) -> ServerInfo {
        let default_tz = self.invoker.resolver().resolve(None);
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: env!("CARGO_PKG_NAME").to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Implementation::from_build_env()
            },
            instructions: Some(format!(
                "DateTime MCP Server. Tool: {}. Call it whenever an answer depends on the current date or time. Default timezone: {}. Use IANA timezone names.",
                TOOL_NAME, default_tz
            )),
        }
    }

    async fn initialize(
        &self,
        _request: InitializeRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> McpResult<InitializeResult> {
        tracing::info!("DateTime MCP Server initialized successfully");
        Ok(self.get_info())
    }
}

#[cfg(test)]
mod tests {
    use rmcp::handler::server::wrapper::Parameters;
    use rmcp::model::ProtocolVersion;

    use super::*;

    fn text_of(result: &CallToolResult) -> String {
        assert_eq!(result.content.len(), 1);
        result.content[0]
            .raw
            .as_text()
            .map(|t| t.text.clone())
            .expect("text content")
    }

    #[tokio::test]
    async fn test_get_current_datetime() {
        let service = DateTimeService::default();

        let req = GetCurrentDateTimeRequest {
            timezone: Some("UTC".to_string()),
        };

        let result = service.get_current_datetime(Parameters(req)).await.unwrap();
        let text = text_of(&result);
        assert!(text.contains("**Timezone:** UTC"));
        assert_ne!(result.is_error, Some(true));
    }

    #[tokio::test]
    async fn test_get_current_datetime_invalid_timezone() {
        let service = DateTimeService::default();

        let req = GetCurrentDateTimeRequest {
            timezone: Some("Not/AZone".to_string()),
        };

        let result = service.get_current_datetime(Parameters(req)).await.unwrap();
        let text = text_of(&result);
        assert!(text.contains("\"Not/AZone\""));
        assert!(text.contains("**Timezone:** UTC"));
        assert_ne!(result.is_error, Some(true));
    }

    #[tokio::test]
    async fn test_get_current_datetime_without_timezone() {
        let service = DateTimeService::new(TimezoneResolver::new(Some("Asia/Dubai".to_string())));

        let result = service
            .get_current_datetime(Parameters(GetCurrentDateTimeRequest::default()))
            .await
            .unwrap();
        assert!(text_of(&result).contains("**Timezone:** Asia/Dubai"));
    }

    #[test]
    fn test_tool_metadata() {
        let tool = DateTimeService::get_current_datetime_tool_attr();

        assert_eq!(tool.name, TOOL_NAME);
        assert!(tool.description.as_deref().unwrap_or_default().contains("proactively"));

        let annotations = tool.annotations.expect("annotations");
        assert_eq!(annotations.title.as_deref(), Some("Get Current Date and Time"));
        assert_eq!(annotations.read_only_hint, Some(true));

        let properties = tool.input_schema.get("properties").expect("properties");
        assert!(properties.get("timezone").is_some());
        let required = tool
            .input_schema
            .get("required")
            .and_then(|r| r.as_array())
            .map(|r| r.len())
            .unwrap_or(0);
        assert_eq!(required, 0);
    }

    #[test]
    fn test_service_creation() {
        let service = DateTimeService::default();
        let info = service.get_info();

        assert_eq!(info.protocol_version, ProtocolVersion::V_2024_11_05);
        assert!(info.capabilities.tools.is_some());
        assert!(info.capabilities.prompts.is_none());
        assert!(info.instructions.unwrap().contains(TOOL_NAME));
    }

    #[test]
    fn test_server_info_names_this_package() {
        let info = DateTimeService::default().get_info();

        assert_eq!(info.server_info.name, "mcp-server-datetime");
        assert_eq!(info.server_info.version, env!("CARGO_PKG_VERSION"));
    }
}
