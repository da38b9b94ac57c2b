mod identity;
mod meal;
mod session_token;
