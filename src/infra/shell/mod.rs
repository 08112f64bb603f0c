//! Interactive terminal front-end.
//!
//! The shell owns one list controller and one form controller, implements the
//! dialog and navigation ports over a [`Console`], and switches between the
//! list and form views whenever a controller asks the navigator to.

mod commands;
mod console;
mod dialogs;
mod render;
mod router;

use std::sync::Arc;

use tracing::{debug, info};

use crate::application::posts::{
    DeleteOutcome, PostFormController, PostFormError, PostListController,
};
use crate::application::store::PostStore;
use crate::domain::categories::CategoryCatalog;
use crate::domain::ids::PostIdGenerator;
use crate::infra::error::InfraError;

pub use commands::{HELP_TEXT, ParseError, ShellCommand};
pub use console::Console;
pub use dialogs::TerminalDialogs;
pub use render::{render_categories, render_form, render_list};
pub use router::{Route, Router};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    List,
    Form,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

const NO_FORM_TEXT: &str = "No form is open; use `new` or `edit ID` first.";

pub struct Shell {
    console: Arc<Console>,
    router: Arc<Router>,
    list: PostListController,
    form: PostFormController,
    view: View,
}

impl Shell {
    pub fn new(
        console: Arc<Console>,
        store: Arc<dyn PostStore>,
        catalog: CategoryCatalog,
        image_limit: usize,
    ) -> Self {
        let router = Arc::new(Router::new());
        let dialogs = Arc::new(TerminalDialogs::new(console.clone()));
        let list = PostListController::new(
            store.clone(),
            dialogs.clone(),
            router.clone(),
            catalog.clone(),
        );
        let form = PostFormController::new(
            store,
            dialogs,
            router.clone(),
            catalog,
            Arc::new(PostIdGenerator::new()),
            image_limit,
        );
        Self {
            console,
            router,
            list,
            form,
            view: View::List,
        }
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn list(&self) -> &PostListController {
        &self.list
    }

    pub fn form(&self) -> &PostFormController {
        &self.form
    }

    /// Read and execute commands until `quit` or end of input.
    pub async fn run(&mut self) -> Result<(), InfraError> {
        info!(target = "postdesk::shell", "shell started");
        self.say("Type `help` for a list of commands.").await?;
        self.show_list().await?;

        loop {
            let prompt = match self.view {
                View::List => "list> ",
                View::Form => "form> ",
            };
            self.console.prompt(prompt).await?;
            let Some(line) = self.console.read_line().await? else {
                break;
            };

            let flow = match ShellCommand::parse(&line) {
                Ok(command) => self.execute(command).await?,
                Err(ParseError::Empty) => Flow::Continue,
                Err(err) => {
                    self.say(&err.to_string()).await?;
                    Flow::Continue
                }
            };
            if flow == Flow::Quit {
                break;
            }
            self.follow_route().await?;
        }

        info!(target = "postdesk::shell", "shell finished");
        Ok(())
    }

    async fn execute(&mut self, command: ShellCommand) -> Result<Flow, InfraError> {
        debug!(target = "postdesk::shell", command = ?command, "executing command");
        match command {
            ShellCommand::List => {
                self.view = View::List;
                self.show_list().await?;
            }
            ShellCommand::Search(text) => {
                self.list.set_search_text(text);
                self.show_list().await?;
            }
            ShellCommand::Category { name, selected } => {
                match self.list.set_category(&name, selected) {
                    Ok(()) => self.show_list().await?,
                    Err(_) => self.unknown_category(&name).await?,
                }
            }
            ShellCommand::Categories => {
                self.say(&render_categories(self.list.filter())).await?;
            }
            ShellCommand::Clear => {
                self.list.clear_filters();
                self.show_list().await?;
            }
            ShellCommand::Edit(id) => self.list.edit_post(id),
            ShellCommand::Delete(id) => {
                let outcome = self.list.delete_post(id).await;
                if matches!(outcome, Ok(DeleteOutcome::Deleted)) && self.view == View::List {
                    self.show_list().await?;
                }
            }
            ShellCommand::New => {
                self.form.open(None);
                self.view = View::Form;
                self.show_form().await?;
            }
            ShellCommand::Help => self.say(HELP_TEXT).await?,
            ShellCommand::Quit => return Ok(Flow::Quit),
            form_command => {
                if self.view != View::Form {
                    self.say(NO_FORM_TEXT).await?;
                } else {
                    self.execute_form(form_command).await?;
                }
            }
        }
        Ok(Flow::Continue)
    }

    async fn execute_form(&mut self, command: ShellCommand) -> Result<(), InfraError> {
        match command {
            ShellCommand::Title(title) => self.form.set_title(title),
            ShellCommand::Content(content) => self.form.set_content(content),
            ShellCommand::SetCategory(name) => {
                if self.form.set_category(&name).is_err() {
                    self.unknown_category(&name).await?;
                }
            }
            ShellCommand::Image(path) => {
                if self.form.select_image(&path).await.is_ok() {
                    self.say("Image attached.").await?;
                }
            }
            ShellCommand::NoImage => self.form.clear_image(),
            ShellCommand::Show => self.show_form().await?,
            ShellCommand::Submit => {
                if let Err(PostFormError::InvalidForm { violations }) = self.form.submit().await {
                    for violation in violations {
                        self.say(&format!("  ! {violation}")).await?;
                    }
                }
            }
            ShellCommand::Cancel => {
                self.form.reset_form();
                self.view = View::List;
                self.show_list().await?;
            }
            other => debug!(target = "postdesk::shell", command = ?other, "not a form command"),
        }
        Ok(())
    }

    /// Apply the navigation a controller requested during the last command.
    async fn follow_route(&mut self) -> Result<(), InfraError> {
        match self.router.take() {
            Some(Route::EditPost(id)) => {
                self.form.open(Some(&id.to_string()));
                self.view = View::Form;
                self.show_form().await
            }
            Some(Route::List) => {
                self.view = View::List;
                self.show_list().await
            }
            None => Ok(()),
        }
    }

    async fn show_list(&self) -> Result<(), InfraError> {
        self.say(&render_list(&self.list.visible_posts(), self.list.filter()))
            .await
    }

    async fn show_form(&self) -> Result<(), InfraError> {
        self.say(&render_form(self.form.state())).await
    }

    async fn unknown_category(&self, name: &str) -> Result<(), InfraError> {
        let known = self.list.catalog().names().join(", ");
        self.say(&format!("Unknown category `{name}`; choose one of: {known}."))
            .await
    }

    async fn say(&self, text: &str) -> Result<(), InfraError> {
        self.console.write_line(text).await?;
        Ok(())
    }
}
