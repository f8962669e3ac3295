//! MCP server exposing the menu tools and guidance prompts.
//!
//! All tools take no arguments and always succeed: failures are reported in the
//! returned text, never as protocol errors.

use std::sync::Arc;

use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler,
    handler::server::router::{prompt::PromptRouter, tool::ToolRouter},
    model::{
        CallToolResult, Content, GetPromptRequestParam, GetPromptResult, Implementation,
        ListPromptsResult, PaginatedRequestParam, PromptMessage, PromptMessageRole,
        ProtocolVersion, ServerCapabilities, ServerInfo,
    },
    prompt, prompt_handler, prompt_router,
    service::RequestContext,
    tool, tool_handler, tool_router,
};

use crate::application::date::current_date_context;
use crate::application::menu::{MenuService, MenuView};
use crate::strings::{messages, prompts};

#[derive(Clone)]
pub struct MenuServer {
    menus: Arc<MenuService>,
    tool_router: ToolRouter<MenuServer>,
    prompt_router: PromptRouter<MenuServer>,
}

fn text_result(text: String) -> Result<CallToolResult, McpError> {
    Ok(CallToolResult::success(vec![Content::text(text)]))
}

fn prompt_result(description: &str, text: String) -> Result<GetPromptResult, McpError> {
    Ok(GetPromptResult {
        description: Some(description.to_string()),
        messages: vec![PromptMessage::new_text(PromptMessageRole::User, text)],
    })
}

#[tool_router]
impl MenuServer {
    pub fn new(menus: Arc<MenuService>) -> Self {
        Self {
            menus,
            tool_router: Self::tool_router(),
            prompt_router: Self::prompt_router(),
        }
    }

    pub fn tool_names(&self) -> Vec<String> {
        self.tool_router
            .list_all()
            .into_iter()
            .map(|tool| tool.name.to_string())
            .collect()
    }

    pub fn prompt_names(&self) -> Vec<String> {
        self.prompt_router
            .list_all()
            .into_iter()
            .map(|prompt| prompt.name)
            .collect()
    }

    #[tool(description = "Get today's menu from Tekuila restaurant")]
    async fn get_current_day_menu(&self) -> Result<CallToolResult, McpError> {
        text_result(self.menus.render(MenuView::Day).await)
    }

    #[tool(description = "Get this week's menu from Tekuila restaurant")]
    async fn get_current_week_menu(&self) -> Result<CallToolResult, McpError> {
        text_result(self.menus.render(MenuView::Week).await)
    }

    #[tool(description = "Get current date and time context")]
    async fn get_current_date(&self) -> Result<CallToolResult, McpError> {
        text_result(current_date_context())
    }

    #[tool(description = "Get today's menu with AI analysis instructions for daily planning")]
    async fn analyze_daily_menu(&self) -> Result<CallToolResult, McpError> {
        text_result(self.menus.render(MenuView::DayAnalysis).await)
    }

    #[tool(description = "Get this week's menu with AI planning instructions for weekly meal planning")]
    async fn plan_weekly_menu(&self) -> Result<CallToolResult, McpError> {
        text_result(self.menus.render(MenuView::WeekPlanning).await)
    }
}

#[prompt_router]
impl MenuServer {
    /// Help analyze and select the best menu options using AI analysis
    #[prompt(name = "analyze_menu_selection")]
    async fn analyze_menu_selection(&self) -> Result<GetPromptResult, McpError> {
        prompt_result(
            "Help analyze and select the best menu options",
            prompts::guidance_prompt(&current_date_context(), &prompts::daily_analysis_instructions()),
        )
    }

    /// Help plan meals for the whole week using AI analysis
    #[prompt(name = "weekly_menu_planning")]
    async fn weekly_menu_planning(&self) -> Result<GetPromptResult, McpError> {
        prompt_result(
            "Help plan meals for the whole week",
            prompts::guidance_prompt(&current_date_context(), &prompts::weekly_planning_instructions()),
        )
    }
}

#[tool_handler]
#[prompt_handler]
impl ServerHandler for MenuServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_prompts()
                .build(),
            server_info: Implementation::from_build_env(),
            instructions: Some(messages::SERVER_INSTRUCTIONS.to_string()),
        }
    }
}
