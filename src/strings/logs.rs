pub const SERVER_START: &str = "🍽️ Starting Tekuila MCP Server...";
pub const SERVER_STOPPED: &str = "Tekuila MCP Server stopped";

pub fn config_loaded(path: &str) -> String {
    format!("Loaded configuration from {path}")
}

pub const STDIO_TRANSPORT: &str = "Serving MCP over stdio";

pub fn http_transport(addr: &str) -> String {
    format!("Serving MCP over streamable HTTP at http://{addr}/mcp")
}

pub fn available(kind: &str, names: &[String]) -> String {
    format!("Available {kind}: {}", names.join(", "))
}

pub fn fetch_failed(url: &str, err: &str) -> String {
    format!("Error fetching RSS from {url}: {err}")
}

pub fn fetch_retry(url: &str, attempt: u32, total: u32) -> String {
    format!("Retrying {url} (attempt {attempt}/{total})")
}

pub fn cache_hit(url: &str) -> String {
    format!("Serving cached feed for {url}")
}

pub fn parse_failed(err: &str) -> String {
    format!("Error parsing RSS: {err}")
}

pub fn shutdown_fail(err: &str) -> String {
    format!("Unable to listen for shutdown signal: {err}")
}

pub fn unreplaced_placeholder(key: &str) -> String {
    format!("Unreplaced prompt placeholder {key}")
}
