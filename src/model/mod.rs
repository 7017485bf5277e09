/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
/// Form POST transport and response decoding
pub mod http;
/// Request models for API calls
pub mod requests;
/// Response models from API calls
pub mod responses;
