use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::warn;
use writer_portal::cli::{Args, Command};
use writer_portal::models::{Attachment, FormField};
use writer_portal::orchestrator::{NotificationKind, Section, WritersView};
use writer_portal::utils::logging;
use writer_portal::{App, MarketplaceApi, MarketplaceClient};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // 加载配置
    let config = args.resolve_config().context("无法加载配置")?;

    // 初始化日志
    logging::init(config.verbose_logging);
    logging::log_startup(&config.api_base_url);

    match args.command {
        Command::Colleges => {
            let client = MarketplaceClient::new(&config);
            for college in client.colleges().await.context("加载学院列表失败")? {
                println!("{}", college);
            }
        }
        Command::Branches => {
            let client = MarketplaceClient::new(&config);
            for branch in client.branches().await.context("加载方向列表失败")? {
                println!("{}", branch);
            }
        }
        Command::Writers {
            college,
            branch,
            html,
        } => {
            let mut app = App::new(&config);
            app.filter_writers(&college, &branch).await;

            match &app.state().writers {
                WritersView::Loaded(_) if html => print!("{}", app.view().writers_list),
                WritersView::Loaded(writers) => {
                    for writer in writers {
                        println!("{}", writer);
                    }
                }
                _ => bail!("{}", app.view().writers_list),
            }
        }
        Command::Apply {
            first_name,
            last_name,
            college_name,
            branch,
            email,
            rate,
            student_id,
        } => {
            let attachment = match student_id {
                Some(path) => Some(
                    Attachment::from_path(&path)
                        .await
                        .with_context(|| format!("无法读取学生证图片: {}", path.display()))?,
                ),
                None => None,
            };

            let mut app = App::new(&config);
            app.show_section(Section::Apply).await;
            app.edit_form(FormField::FirstName, first_name);
            app.edit_form(FormField::LastName, last_name);
            app.edit_form(FormField::CollegeName, college_name);
            app.edit_form(FormField::Branch, branch);
            app.edit_form(FormField::Email, email);
            app.edit_form(FormField::RatePerTenPages, rate);
            app.select_attachment(attachment);

            let submitted = app.submit_application().await;
            for notification in app.take_notifications() {
                match notification.kind {
                    NotificationKind::Success => println!("{}", notification.text),
                    NotificationKind::Error => eprintln!("{}", notification.text),
                }
            }

            if !submitted {
                warn!("⚠️ 申请未提交成功");
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
