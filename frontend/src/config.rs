/// Base URL of the blog API, fixed at build time via `BACKEND_URL`.
pub const BACKEND_URL: &str = match option_env!("BACKEND_URL") {
    Some(url) => url,
    None => "http://127.0.0.1:8787",
};
