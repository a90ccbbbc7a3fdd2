#[cfg(debug_assertions)]
pub fn get_backend_url() -> &'static str {
    "http://localhost:3000"  // contact relay run locally with `cargo run -p teslawatt-backend`
}

#[cfg(not(debug_assertions))]
pub fn get_backend_url() -> &'static str {
    ""  // served behind the same origin in production
}

pub fn contact_endpoint() -> String {
    format!("{}/sendemail", get_backend_url())
}
