//!
//! Small helpers shared by the RPC client.
//!

///
/// Strip trailing slashes and assume `http://` when no scheme is given.
///
pub fn normalize_rpc_url(rpc_url: &str) -> String {
    let trimmed = rpc_url.trim().trim_end_matches('/');
    if trimmed.contains("://") {
        trimmed.to_string()
    } else {
        format!("http://{trimmed}")
    }
}
