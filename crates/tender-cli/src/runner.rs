use crate::{CliError, CliResult, Commands, documents};

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use serde_json::{Value, json};
use tender_client::{ApiClient, RestAuthProvider, RestDocumentStore, RestProfileStore};
use tender_config::{Config, TokenFile};
use tender_core::{AccessToken, AuthProvider, DocumentKind, OAuthProvider, Session};
use tender_session::{
    DiagnosticEntry, Diagnostics, DocumentUploader, SessionManager, SessionRuntime,
};

/// Result of one CLI invocation plus whatever the session recorded on the way
pub struct Outcome {
    pub result: CliResult<Value>,
    pub diagnostics: Vec<DiagnosticEntry>,
}

/// Run a single command against the configured API
pub async fn run(command: Commands, config: Config, config_dir: PathBuf) -> Outcome {
    // Local only, no session needed
    if let Commands::ParseResume { path } = &command {
        return Outcome {
            result: documents::parse_resume(path),
            diagnostics: Vec::new(),
        };
    }

    let runner = match Runner::start(config, config_dir).await {
        Ok(runner) => runner,
        Err(e) => {
            return Outcome {
                result: Err(e),
                diagnostics: Vec::new(),
            };
        }
    };

    let result = runner.execute(command).await;
    let result = match runner.discard_rejected_session() {
        Ok(()) => result,
        Err(e) => result.and(Err(e)),
    };
    let diagnostics = runner.diagnostics();
    runner.shutdown();

    Outcome {
        result,
        diagnostics,
    }
}

/// Session stack wired to the REST adapters, restored from the token file
pub struct Runner {
    config_dir: PathBuf,
    /// Started from a saved token file
    restored: bool,
    provider: Arc<RestAuthProvider>,
    manager: SessionManager,
    uploader: DocumentUploader,
    runtime: SessionRuntime,
}

impl Runner {
    /// Build the stack and wait until startup has settled, so a stored
    /// session is already committed when the command runs.
    pub async fn start(config: Config, config_dir: PathBuf) -> CliResult<Self> {
        let timeout = Duration::from_secs(config.api.timeout_secs);
        let api = ApiClient::with_timeout(&config.api.base_url, timeout).map_err(|e| {
            CliError::Startup {
                message: e.to_string(),
            }
        })?;
        let api = Arc::new(api);

        let stored = TokenFile::read_in(&config_dir)?;
        if let Some(file) = &stored {
            log::debug!(
                "Restoring session for {} saved at {}",
                file.session.user_id,
                file.saved_at
            );
        }

        let restored = stored.is_some();
        let provider = Arc::new(RestAuthProvider::with_session(
            Arc::clone(&api),
            stored.map(|file| file.session),
        ));
        let auth: Arc<dyn AuthProvider> = provider.clone();
        let manager = SessionManager::with_config(
            auth,
            Arc::new(RestProfileStore::new(Arc::clone(&api))),
            &config.session,
            Diagnostics::from_config(&config.diagnostics),
        );
        let uploader = DocumentUploader::with_config(
            Arc::new(RestDocumentStore::new(api)),
            manager.clone(),
            &config.upload,
        );

        let runtime = manager.start();
        let mut updates = manager.subscribe();
        if updates.wait_for(|snap| !snap.loading).await.is_err() {
            return Err(CliError::Startup {
                message: "Session runtime stopped during startup".to_string(),
            });
        }

        Ok(Self {
            config_dir,
            restored,
            provider,
            manager,
            uploader,
            runtime,
        })
    }

    pub fn manager(&self) -> &SessionManager {
        &self.manager
    }

    pub fn diagnostics(&self) -> Vec<DiagnosticEntry> {
        self.manager.diagnostics().entries()
    }

    /// Delete the token file once the API has rejected the saved session,
    /// so the next invocation starts signed out.
    pub fn discard_rejected_session(&self) -> CliResult<()> {
        if !self.restored {
            return Ok(());
        }
        let snapshot = self.manager.snapshot();
        let rejected = snapshot
            .last_error
            .as_ref()
            .is_some_and(|e| e.code == "NOT_AUTHENTICATED");
        if snapshot.session().is_none() && rejected {
            log::info!("Saved session was rejected, removing token file");
            TokenFile::remove_in(&self.config_dir)?;
        }
        Ok(())
    }

    pub fn shutdown(self) {
        self.runtime.shutdown();
    }

    pub async fn execute(&self, command: Commands) -> CliResult<Value> {
        match command {
            Commands::Login { email, password } => {
                let session = self.manager.login(&email, &password).await?;
                self.persist(&session)
            }
            Commands::Signup {
                email,
                password,
                name,
            } => {
                let session = self.manager.signup(&email, &password, &name).await?;
                self.persist(&session)
            }
            Commands::Oauth {
                provider,
                redirect_to,
            } => {
                let provider: OAuthProvider = provider.parse()?;
                let url = self
                    .manager
                    .sign_in_with_oauth(provider, &redirect_to)
                    .await?;
                Ok(json!({ "provider": provider.as_str(), "url": url }))
            }
            Commands::OauthComplete { token } => {
                let session = self
                    .provider
                    .complete_oauth(AccessToken::new(token))
                    .await
                    .inspect_err(|e| {
                        self.manager
                            .diagnostics()
                            .record_auth_error("oauth_complete", e)
                    })?;
                self.persist(&session)
            }
            Commands::Logout => {
                let signed_in = self.manager.current_user().is_some();
                self.manager.logout().await;
                TokenFile::remove_in(&self.config_dir)?;
                Ok(json!({ "signed_out": signed_in }))
            }
            Commands::Me => match self.manager.refresh_profile().await? {
                Some(profile) => Ok(serde_json::to_value(profile)?),
                None => Ok(Value::Null),
            },
            Commands::Update(args) => {
                let profile = self.manager.update_profile(&args.into_update()).await?;
                Ok(serde_json::to_value(profile)?)
            }
            Commands::UploadResume { path, parse } => {
                let file = documents::load(&path)?;
                let receipt = self.uploader.upload(DocumentKind::Resume, &file).await?;
                let mut output = json!({ "receipt": receipt });
                if parse {
                    output["parsed"] = documents::prefill(&file);
                }
                Ok(output)
            }
            Commands::UploadTranscript { path } => {
                let file = documents::load(&path)?;
                let receipt = self
                    .uploader
                    .upload(DocumentKind::Transcript, &file)
                    .await?;
                Ok(json!({ "receipt": receipt }))
            }
            Commands::ParseResume { path } => documents::parse_resume(&path),
        }
    }

    fn persist(&self, session: &Session) -> CliResult<Value> {
        let path = TokenFile::new(session.clone()).write_in(&self.config_dir)?;
        log::info!("Session for {} saved to {}", session.user_id, path.display());
        Ok(json!({
            "user_id": session.user_id,
            "email": session.email,
            "token_type": session.token_type,
        }))
    }
}
