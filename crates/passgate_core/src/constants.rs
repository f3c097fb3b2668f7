pub mod providers {
    pub const CREDENTIALS_ID: &str = "credentials";
    pub const CREDENTIALS_NAME: &str = "Credentials";
    pub const CREDENTIALS_TYPE: &str = "credentials";
}

pub mod fields {
    pub const USERNAME: &str = "username";
    pub const PASSWORD: &str = "password";
}

pub mod routes {
    pub const HEALTH: &str = "/health";

    pub const BASE_PATH: &str = "/api/auth";

    pub const PROVIDERS: &str = "/providers";
    pub const SIGNIN: &str = "/signin";
    pub const CALLBACK: &str = "/callback";
    pub const CALLBACK_BY_PROVIDER: &str = "/callback/{provider}";
    pub const SESSION: &str = "/session";
}
