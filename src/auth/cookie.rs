use actix_web::cookie::{time::Duration, Cookie};

/// Name of the HTTP-only cookie carrying the refresh token.
pub const REFRESH_COOKIE_NAME: &str = "refresh_token";

const REFRESH_COOKIE_PATH: &str = "/";

/// Builds the cookie set on login. Lives as long as the refresh token itself.
pub fn refresh_cookie(token: &str, max_age: chrono::Duration, secure: bool) -> Cookie<'static> {
    Cookie::build(REFRESH_COOKIE_NAME, token.to_owned())
        .path(REFRESH_COOKIE_PATH)
        .http_only(true)
        .secure(secure)
        .max_age(Duration::seconds(max_age.num_seconds()))
        .finish()
}

/// Builds the directive that makes the client drop its refresh cookie.
pub fn cleared_refresh_cookie(secure: bool) -> Cookie<'static> {
    Cookie::build(REFRESH_COOKIE_NAME, "")
        .path(REFRESH_COOKIE_PATH)
        .http_only(true)
        .secure(secure)
        .max_age(Duration::seconds(-1))
        .finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_refresh_cookie_attributes() {
        let cookie = refresh_cookie("abc", chrono::Duration::days(7), false);
        assert_eq!(cookie.name(), "refresh_token");
        assert_eq!(cookie.value(), "abc");
        assert_eq!(cookie.path(), Some("/"));
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.secure(), Some(false));
        assert_eq!(cookie.max_age(), Some(Duration::seconds(604_800)));
    }

    #[test]
    fn test_cleared_cookie_expires_immediately() {
        let cookie = cleared_refresh_cookie(true);
        assert_eq!(cookie.value(), "");
        assert_eq!(cookie.path(), Some("/"));
        assert_eq!(cookie.secure(), Some(true));
        assert_eq!(cookie.max_age(), Some(Duration::seconds(-1)));
    }
}
