pub mod sign_in_request_resource;
