use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use std::io::{self, Write};
use std::path::PathBuf;
use unicode_width::UnicodeWidthStr;
use userdesk::api::DeskApi;
use userdesk::commands::{helpers, CmdMessage, CmdResult, MessageLevel};
use userdesk::config::DeskConfig;
use userdesk::error::Result;
use userdesk::model::{Company, User, UserData};
use userdesk::page::{PageInfo, Pager};
use userdesk::store::fs::FileStore;
use userdesk::store::remote::RemoteStore;
use userdesk::store::UserStore;

mod args;
use args::Cli;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let data_dir = resolve_data_dir(&cli);
    let config = DeskConfig::load(&data_dir).unwrap_or_default();

    let page_size = cli.page_size.unwrap_or(config.page_size);
    let pager = Pager::with_page_size(page_size);

    let remote_url = if cli.local {
        None
    } else {
        cli.remote.clone().or(config.remote_url)
    };

    match remote_url {
        Some(url) => {
            let api = DeskApi::new(RemoteStore::new(url)?, pager);
            Session::new(api, true).run()
        }
        None => {
            let api = DeskApi::new(FileStore::new(data_dir), pager);
            Session::new(api, false).run()
        }
    }
}

fn resolve_data_dir(cli: &Cli) -> PathBuf {
    if let Some(dir) = &cli.data_dir {
        return dir.clone();
    }
    if let Ok(dir) = std::env::var("USERDESK_DATA_DIR") {
        return PathBuf::from(dir);
    }
    let proj_dirs =
        ProjectDirs::from("com", "userdesk", "userdesk").expect("Could not determine data dir");
    proj_dirs.data_dir().to_path_buf()
}

/// The edit form plus the id input, exactly what the operator sees.
#[derive(Debug, Default)]
struct Form {
    name: String,
    username: String,
    email: String,
    phone: String,
    website: String,
    company: String,
}

impl Form {
    fn set_field(&mut self, field: &str, value: &str) -> bool {
        let value = value.trim();
        match field {
            "name" => self.name = value.to_string(),
            "username" => self.username = value.to_string(),
            "email" => self.email = value.to_string(),
            "phone" => self.phone = value.to_string(),
            "website" => self.website = value.to_string(),
            "company" => self.company = value.to_string(),
            _ => return false,
        }
        true
    }

    fn to_data(&self) -> UserData {
        UserData {
            name: Some(self.name.trim().to_string()),
            username: Some(self.username.trim().to_string()),
            email: Some(self.email.trim().to_string()),
            phone: Some(self.phone.trim().to_string()),
            website: Some(self.website.trim().to_string()),
            company: Some(Company::named(self.company.trim())),
        }
    }

    fn set_from(&mut self, user: &User) {
        self.name = user.name.clone();
        self.username = user.username.clone();
        self.email = user.email.clone();
        self.phone = user.phone.clone();
        self.website = user.website.clone();
        self.company = user.company.name.clone();
    }

    fn clear(&mut self) {
        *self = Form::default();
    }
}

struct Session<S: UserStore> {
    api: DeskApi<S>,
    form: Form,
    id_input: String,
    remote: bool,
}

impl<S: UserStore> Session<S> {
    fn new(api: DeskApi<S>, remote: bool) -> Self {
        Self {
            api,
            form: Form::default(),
            id_input: String::new(),
            remote,
        }
    }

    fn run(mut self) -> Result<()> {
        println!("{}", "Ready. Load a user by ID or create a new one.".dimmed());
        if !self.remote {
            // Boot render of the table, like any mutation does afterwards.
            let result = self.api.list_users()?;
            print_listing(&result);
        }

        loop {
            print!("> ");
            io::stdout().flush()?;

            let mut line = String::new();
            if io::stdin().read_line(&mut line)? == 0 {
                break;
            }
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            if line == "quit" || line == "exit" {
                break;
            }

            if let Err(e) = self.dispatch(line) {
                println!("{}", format!("Error: {}", e).red());
            }
        }

        Ok(())
    }

    fn dispatch(&mut self, line: &str) -> Result<()> {
        let (cmd, rest) = match line.split_once(char::is_whitespace) {
            Some((cmd, rest)) => (cmd, rest.trim()),
            None => (line, ""),
        };

        match cmd {
            "help" => print_help(),
            "id" => self.id_input = rest.to_string(),
            "set" => self.handle_set(rest),
            "show" => self.print_form(),
            "clear" => {
                self.id_input.clear();
                self.form.clear();
                status("Form cleared.");
            }
            "load" => self.handle_load(rest)?,
            "create" => self.handle_create()?,
            "save" => self.handle_save()?,
            "delete" => self.handle_delete()?,
            "list" => self.handle_list()?,
            "pagesize" => self.handle_page_size(rest)?,
            "next" => self.handle_page_move(true)?,
            "prev" => self.handle_page_move(false)?,
            _ => status(&format!("Unknown command: {}. Type \"help\".", cmd)),
        }

        Ok(())
    }

    fn handle_set(&mut self, rest: &str) {
        let (field, value) = match rest.split_once(char::is_whitespace) {
            Some((field, value)) => (field, value),
            None => (rest, ""),
        };
        if field.is_empty() {
            status("Usage: set <field> <value>");
        } else if !self.form.set_field(field, value) {
            status(&format!(
                "Unknown field: {}. Fields: name, username, email, phone, website, company.",
                field
            ));
        }
    }

    fn handle_load(&mut self, rest: &str) -> Result<()> {
        if !rest.is_empty() {
            self.id_input = rest.to_string();
        }
        let Some(id) = self.parse_id("Enter an ID to load.") else {
            return Ok(());
        };

        self.loading(&format!("Fetching user #{}...", id));
        let result = self.api.load_user(id)?;
        if let Some(user) = &result.user {
            self.form.set_from(user);
        } else if result.clear_form {
            self.form.clear();
        }
        print_messages(&result.messages);
        Ok(())
    }

    fn handle_create(&mut self) -> Result<()> {
        let data = self.form.to_data();
        if helpers::validate(&data).is_none() {
            self.loading("Sending (POST)...");
        }
        let result = self.api.create_user(&data)?;
        if let Some(id) = result.created_id {
            self.id_input = id.to_string();
        }
        print_messages(&result.messages);
        if result.created_id.is_some() {
            self.render_list()?;
        }
        Ok(())
    }

    fn handle_save(&mut self) -> Result<()> {
        let Some(id) = self.parse_id("Enter the ID to save.") else {
            return Ok(());
        };

        let data = self.form.to_data();
        if helpers::validate(&data).is_none() {
            self.loading(&format!("Saving #{} (PUT)...", id));
        }
        let result = self.api.save_user(id, &data)?;
        if let Some(user) = &result.user {
            // The store's record is authoritative; refill the form with it.
            self.form.set_from(user);
        }
        print_messages(&result.messages);
        if result.user.is_some() {
            self.render_list()?;
        }
        Ok(())
    }

    fn handle_delete(&mut self) -> Result<()> {
        let Some(id) = self.parse_id("Enter the ID to delete.") else {
            return Ok(());
        };

        let result = self.api.delete_user(id, false)?;
        if result.clear_form {
            self.id_input.clear();
            self.form.clear();
        }
        print_messages(&result.messages);
        if result.clear_form {
            self.render_list()?;
        }
        Ok(())
    }

    fn handle_list(&mut self) -> Result<()> {
        if !self.api.supports_listing() {
            status("The remote backend does not list users; load them by ID.");
            return Ok(());
        }
        let result = self.api.list_users()?;
        print_listing(&result);
        Ok(())
    }

    fn handle_page_size(&mut self, rest: &str) -> Result<()> {
        let Ok(n) = rest.parse::<usize>() else {
            status("Usage: pagesize <n>");
            return Ok(());
        };
        if n == 0 {
            status("The page size must be at least 1.");
            return Ok(());
        }
        if !self.api.supports_listing() {
            status("The remote backend does not list users; load them by ID.");
            return Ok(());
        }
        let result = self.api.set_page_size(n)?;
        print_listing(&result);
        Ok(())
    }

    fn handle_page_move(&mut self, forward: bool) -> Result<()> {
        if !self.api.supports_listing() {
            status("The remote backend does not list users; load them by ID.");
            return Ok(());
        }
        let result = if forward {
            self.api.next_page()?
        } else {
            self.api.prev_page()?
        };
        print_listing(&result);
        Ok(())
    }

    /// Re-render the table after a mutation; no-op for the remote variant.
    fn render_list(&mut self) -> Result<()> {
        if self.api.supports_listing() {
            let result = self.api.list_users()?;
            print_listing(&result);
        }
        Ok(())
    }

    /// The id input must be filled and numeric before any store call.
    fn parse_id(&self, missing_msg: &str) -> Option<u64> {
        let raw = self.id_input.trim();
        if raw.is_empty() {
            status(missing_msg);
            return None;
        }
        match raw.parse() {
            Ok(id) => Some(id),
            Err(_) => {
                status("The ID must be a number.");
                None
            }
        }
    }

    /// Remote calls block the panel; show what is in flight first.
    fn loading(&self, msg: &str) {
        if self.remote {
            println!("{}", msg.dimmed());
        }
    }

    fn print_form(&self) {
        println!("id:       {}", self.id_input);
        println!("name:     {}", self.form.name);
        println!("username: {}", self.form.username);
        println!("email:    {}", self.form.email);
        println!("phone:    {}", self.form.phone);
        println!("website:  {}", self.form.website);
        println!("company:  {}", self.form.company);
    }
}

fn status(msg: &str) {
    println!("{}", msg);
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

const COLUMNS: [(&str, usize); 7] = [
    ("ID", 5),
    ("NAME", 16),
    ("USERNAME", 12),
    ("EMAIL", 24),
    ("PHONE", 14),
    ("WEBSITE", 18),
    ("COMPANY", 12),
];

fn print_listing(result: &CmdResult) {
    print_table(&result.listed);
    if let Some(info) = &result.page {
        print_page_info(info);
    }
    print_messages(&result.messages);
}

fn print_table(users: &[User]) {
    if users.is_empty() {
        println!("No records.");
        return;
    }

    let header: String = COLUMNS
        .iter()
        .map(|(title, width)| cell(title, *width))
        .collect::<Vec<_>>()
        .join(" ");
    println!("{}", header.bold());

    for user in users {
        let row = [
            cell(&user.id.to_string(), COLUMNS[0].1),
            cell(&user.name, COLUMNS[1].1),
            cell(&user.username, COLUMNS[2].1),
            cell(&user.email, COLUMNS[3].1),
            cell(&user.phone, COLUMNS[4].1),
            cell(&user.website, COLUMNS[5].1),
            cell(&user.company.name, COLUMNS[6].1),
        ]
        .join(" ");
        println!("{}", row);
    }
}

fn print_page_info(info: &PageInfo) {
    let plural = if info.total == 1 { "record" } else { "records" };
    println!(
        "{}",
        format!(
            "Page {} of {} ({} {})",
            info.current_page, info.total_pages, info.total, plural
        )
        .dimmed()
    );
}

/// Pad or truncate a cell to its column width.
fn cell(text: &str, width: usize) -> String {
    let truncated = truncate_to_width(text, width);
    let padding = width.saturating_sub(truncated.width());
    format!("{}{}", truncated, " ".repeat(padding))
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

fn print_help() {
    println!("Commands:");
    println!("  load [id]          Load a record into the form");
    println!("  id <n>             Set the id input without loading");
    println!("  set <field> <val>  Fill a form field (name, username, email,");
    println!("                     phone, website, company)");
    println!("  show               Print the form");
    println!("  create             Create a record from the form");
    println!("  save               Update the record with the current id");
    println!("  delete             Delete the record with the current id");
    println!("  clear              Clear the form and the id input");
    println!("  list               Render the record table (local store)");
    println!("  pagesize <n>       Change the page size");
    println!("  next / prev        Move through the pages");
    println!("  quit               Leave the panel");
}
