#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UpdateAccountInput {
    pub name: Option<String>,
    pub avatar_url: Option<String>,
}
