pub mod form_from_request;
