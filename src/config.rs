#[cfg(debug_assertions)]
pub fn get_login_url() -> &'static str {
    "http://localhost:8081/Login/login.html"  // Development URL when serving the login page locally
}

#[cfg(not(debug_assertions))]
pub fn get_login_url() -> &'static str {
    "/Login/login.html"  // Production URL
}
