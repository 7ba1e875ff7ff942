//! Tool Router - builds the rmcp ToolRouter from the tool definitions.
//!
//! Each tool knows how to create its own route; this module just wires them
//! to the shared Teamtailor client.

use std::sync::Arc;

use rmcp::handler::server::tool::ToolRouter;

use crate::teamtailor::TeamtailorClient;

use super::definitions::{GetCandidateTool, ListCandidatesTool};

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(client: Arc<TeamtailorClient>) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    ToolRouter::new()
        .with_route(ListCandidatesTool::create_route(client.clone()))
        .with_route(GetCandidateTool::create_route(client))
}

#[cfg(test)]
mod tests {
    use super::super::registry::ToolRegistry;
    use super::*;

    struct TestServer {}

    fn test_client() -> Arc<TeamtailorClient> {
        Arc::new(TeamtailorClient::new("https://api.teamtailor.com/v1", "test").unwrap())
    }

    #[test]
    fn test_build_router() {
        let router: ToolRouter<TestServer> = build_tool_router(test_client());
        let tools = router.list_all();
        assert_eq!(tools.len(), 2);

        let names: Vec<_> = tools.iter().map(|t| t.name.as_ref()).collect();
        assert!(names.contains(&"list_candidates"));
        assert!(names.contains(&"get_candidate"));
    }

    #[test]
    fn test_registry_matches_router() {
        let registry_tools = ToolRegistry::get_all_tools();

        let router: ToolRouter<TestServer> = build_tool_router(test_client());
        let router_tools = router.list_all();
        let router_names: Vec<_> = router_tools.iter().map(|t| t.name.as_ref()).collect();

        assert_eq!(registry_tools.len(), router_names.len());
        for tool in &registry_tools {
            assert!(router_names.contains(&tool.name.as_ref()));
        }
    }
}
