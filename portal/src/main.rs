use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use colored::Colorize;
use common::config::PortalConfig;
use common::models::{InquiryType, Severity};
use common::telemetry::init_tracing;
use portal::api::{HttpHrClient, HttpInquiryClient};
use portal::auth::{AuthProvider, AuthSession};
use portal::careers::{
    ApplicationField, CareerSubmission, CareersPage, JobPosition, TalentPoolField,
};
use portal::inquiry::{Attachment, FormField, InquiryPage, SubmissionOutcome};
use portal::navigation::{LogNavigator, Navigator};

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    /// Backend base URL, overrides PORTAL_API_BASE_URL
    #[clap(long, global = true)]
    api_url: Option<String>,

    /// Bearer token, overrides PORTAL_AUTH_TOKEN
    #[clap(long, global = true)]
    token: Option<String>,

    /// Signed-in user email, overrides PORTAL_USER_EMAIL
    #[clap(long, global = true)]
    user_email: Option<String>,

    /// Signed-in user display name, overrides PORTAL_USER_NAME
    #[clap(long, global = true)]
    user_name: Option<String>,

    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Submit a 1:1 inquiry
    Inquiry {
        #[clap(long = "type")]
        inquiry_type: String,
        #[clap(long)]
        subject: String,
        #[clap(long)]
        content: String,
        /// Reply address, defaults to the signed-in user's email
        #[clap(long)]
        email: Option<String>,
        #[clap(long)]
        phone: Option<String>,
        /// Files to attach, at most three are kept
        #[clap(long = "attach")]
        attachments: Vec<PathBuf>,
    },

    /// List inquiry types
    InquiryTypes,

    /// Apply to a job posting
    Apply {
        #[clap(long)]
        title: String,
        #[clap(long)]
        department: String,
        #[clap(long)]
        name: String,
        #[clap(long)]
        email: String,
        #[clap(long)]
        phone: String,
        #[clap(long)]
        cover_letter: String,
    },

    /// Register in the talent pool
    TalentPool {
        #[clap(long)]
        name: String,
        #[clap(long)]
        email: String,
        #[clap(long)]
        phone: String,
        #[clap(long)]
        field: String,
        #[clap(long)]
        experience: Option<String>,
        #[clap(long)]
        introduction: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let mut config = PortalConfig::from_env()?;
    if let Some(api_url) = cli.api_url {
        config.api_base_url = api_url.trim_end_matches('/').to_string();
    }
    config.auth_token = cli.token.or(config.auth_token);
    config.user_email = cli.user_email.or(config.user_email);
    config.user_name = cli.user_name.or(config.user_name);

    let navigator: Arc<dyn Navigator> = Arc::new(LogNavigator);

    match cli.command {
        Commands::Inquiry {
            inquiry_type,
            subject,
            content,
            email,
            phone,
            attachments,
        } => {
            let session = Arc::new(AuthSession::from_config(&config));
            let client = HttpInquiryClient::new(&config, Arc::clone(&session))?;
            let auth: Arc<dyn AuthProvider> = session;
            let page = InquiryPage::new(client, auth, navigator);

            page.set_field(FormField::InquiryType, &inquiry_type)?;
            page.set_field(FormField::Subject, &subject)?;
            page.set_field(FormField::Content, &content)?;
            if let Some(email) = email {
                page.set_field(FormField::Email, &email)?;
            }
            if let Some(phone) = phone {
                page.set_field(FormField::Phone, &phone)?;
            }
            if !attachments.is_empty() {
                let files = attachments
                    .iter()
                    .map(|path| {
                        Attachment::from_path(path)
                            .with_context(|| format!("cannot attach {}", path.display()))
                    })
                    .collect::<anyhow::Result<Vec<_>>>()?;
                page.attach_files(files);
            }

            let outcome = page.submit().await;
            if let Some((message, severity)) = page.notification_message() {
                print_notice(&message, severity);
            }
            match outcome {
                SubmissionOutcome::Success { inquiry_number, .. } => {
                    println!("접수번호: {}", inquiry_number.as_str().bold());
                }
                SubmissionOutcome::Invalid(errors) => {
                    for field in errors.invalid_fields() {
                        println!("  - {:?}", field);
                    }
                    anyhow::bail!("inquiry form is invalid");
                }
                SubmissionOutcome::LoginRequired => {
                    page.wait_pending_redirect().await;
                    anyhow::bail!("sign in first (--user-email / --token)");
                }
                SubmissionOutcome::Failure { reason } => anyhow::bail!(reason),
                SubmissionOutcome::AlreadySubmitting | SubmissionOutcome::AlreadySubmitted => {}
            }
        }
        Commands::InquiryTypes => {
            for inquiry_type in InquiryType::ALL {
                println!("{:<12} {}", inquiry_type.to_string().as_str().bold(), inquiry_type.label());
            }
        }
        Commands::Apply {
            title,
            department,
            name,
            email,
            phone,
            cover_letter,
        } => {
            let position = JobPosition {
                id: 1,
                title,
                department,
                ..JobPosition::default()
            };
            let page = CareersPage::new(HttpHrClient::new(&config)?, vec![position]);
            page.open_job(1);
            page.start_application();
            page.set_application_field(ApplicationField::Name, &name);
            page.set_application_field(ApplicationField::Email, &email);
            page.set_application_field(ApplicationField::Phone, &phone);
            page.set_application_field(ApplicationField::CoverLetter, &cover_letter);

            report_career_submission(page.submit_application().await)?;
        }
        Commands::TalentPool {
            name,
            email,
            phone,
            field,
            experience,
            introduction,
        } => {
            let page = CareersPage::new(HttpHrClient::new(&config)?, Vec::new());
            page.open_talent_pool();
            page.set_talent_pool_field(TalentPoolField::Name, &name);
            page.set_talent_pool_field(TalentPoolField::Email, &email);
            page.set_talent_pool_field(TalentPoolField::Phone, &phone);
            page.set_talent_pool_field(TalentPoolField::Field, &field);
            page.set_talent_pool_field(
                TalentPoolField::Experience,
                experience.as_deref().unwrap_or_default(),
            );
            page.set_talent_pool_field(TalentPoolField::Introduction, &introduction);

            report_career_submission(page.submit_talent_pool().await)?;
        }
    }

    Ok(())
}

fn print_notice(message: &str, severity: Severity) {
    let line = match severity {
        Severity::Success => message.green(),
        Severity::Error => message.red(),
        Severity::Warning => message.yellow(),
        Severity::Info => message.blue(),
    };
    println!("{}", line);
}

fn report_career_submission(outcome: CareerSubmission) -> anyhow::Result<()> {
    match outcome {
        CareerSubmission::Submitted => {
            print_notice("제출되었습니다. 감사합니다!", Severity::Success);
            Ok(())
        }
        CareerSubmission::Incomplete => anyhow::bail!("every required field must be filled"),
        CareerSubmission::NoPositionSelected => anyhow::bail!("no job posting selected"),
        CareerSubmission::FormNotOpen => anyhow::bail!("the form is not open"),
        CareerSubmission::AlreadySubmitted => anyhow::bail!("already submitted"),
        CareerSubmission::Failed(err) => Err(err).context("submission failed"),
    }
}
