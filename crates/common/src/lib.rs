//! Cross-crate helpers shared by the food delivery services.

pub mod types;
pub mod utils;
pub mod env;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_type_ok() {
        let h = types::Health { status: "ok" };
        assert_eq!(h.status, "ok");
    }

    #[test]
    fn success_response_serializes_message() {
        let body = types::SuccessResponse::new("Category added successfully");
        assert_eq!(body.message, "Category added successfully");
    }
}
