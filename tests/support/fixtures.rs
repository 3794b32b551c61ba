//! Test fixtures and constants.

/// Standard test variables used across multiple tests.
pub const STANDARD_VARS: &[(&str, &str)] = &[
    ("DATABASE_URL", "postgres://localhost/mydb"),
    ("API_KEY", "sk-test-12345"),
    ("JWT_SECRET", "super-secret-jwt-token"),
    ("REDIS_URL", "redis://localhost:6379"),
    ("S3_BUCKET", "my-app-bucket"),
];

/// A value with characters that stress the serialized payload.
pub const AWKWARD_VALUE: &str = "p@ssw0rd!#$% with spaces\nand a second line";
