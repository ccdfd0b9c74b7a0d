#[derive(Debug)]
pub struct CreateUser {
    pub name: String,
    pub email: String,
    pub location: String,
}
