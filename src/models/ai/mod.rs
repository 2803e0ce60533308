pub mod completion;
pub mod requests;
pub mod responses;
