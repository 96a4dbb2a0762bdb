use clap::Args;
use tender_core::ProfileUpdate;

#[derive(Args, Debug, Default)]
pub struct ProfileArgs {
    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub headline: Option<String>,

    #[arg(long)]
    pub bio: Option<String>,

    #[arg(long)]
    pub phone: Option<String>,

    #[arg(long)]
    pub linkedin_url: Option<String>,

    #[arg(long)]
    pub github_url: Option<String>,

    #[arg(long)]
    pub portfolio_url: Option<String>,

    /// Comma-separated, replaces the current list
    #[arg(long, value_delimiter = ',')]
    pub skills: Option<Vec<String>>,

    /// Comma-separated, replaces the current list
    #[arg(long, value_delimiter = ',')]
    pub interests: Option<Vec<String>>,

    #[arg(long)]
    pub goals: Option<String>,
}

impl ProfileArgs {
    pub fn into_update(self) -> ProfileUpdate {
        ProfileUpdate {
            name: self.name,
            headline: self.headline,
            bio: self.bio,
            phone: self.phone,
            linkedin_url: self.linkedin_url,
            github_url: self.github_url,
            portfolio_url: self.portfolio_url,
            skills: self.skills.map(trim_all),
            interests: self.interests.map(trim_all),
            goals: self.goals,
            ..ProfileUpdate::default()
        }
    }
}

fn trim_all(values: Vec<String>) -> Vec<String> {
    values.into_iter().map(|v| v.trim().to_string()).collect()
}
