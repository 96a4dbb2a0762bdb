use crate::profile_args::ProfileArgs;

use std::path::PathBuf;

use clap::Subcommand;

pub const DEFAULT_OAUTH_REDIRECT: &str = "tender://auth/callback";

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Sign in with email and password
    Login {
        #[arg(long)]
        email: String,

        #[arg(long)]
        password: String,
    },

    /// Create an account and sign in
    Signup {
        #[arg(long)]
        email: String,

        #[arg(long)]
        password: String,

        /// Full name
        #[arg(long)]
        name: String,
    },

    /// Print the authorization URL for an OAuth provider
    Oauth {
        /// Provider: google, github, or linkedin
        provider: String,

        #[arg(long, default_value = DEFAULT_OAUTH_REDIRECT)]
        redirect_to: String,
    },

    /// Finish an OAuth sign-in with the token from the redirect
    OauthComplete {
        token: String,
    },

    /// Sign out and forget the stored session
    Logout,

    /// Show the signed-in user's profile
    Me,

    /// Update profile fields
    Update(ProfileArgs),

    /// Upload a resume (PDF, DOC, or DOCX)
    UploadResume {
        path: PathBuf,

        /// Also extract contact details from the file
        #[arg(long)]
        parse: bool,
    },

    /// Upload an academic transcript (PDF, DOC, or DOCX)
    UploadTranscript {
        path: PathBuf,
    },

    /// Extract contact details from a resume without uploading it
    ParseResume {
        path: PathBuf,
    },
}

impl Commands {
    /// Whether the command talks to the API at all
    pub fn needs_session(&self) -> bool {
        !matches!(self, Commands::ParseResume { .. })
    }
}
