//! Interactive shell standing in for the bill form window

use std::cell::RefCell;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use electric_bill::application::{ActionOutcome, SavePrompt};
use electric_bill::{AppError, BillForm, BillingSession, CustomerClass, DiscountType};

const HELP: &str = "\
Commands:
  generate     fill in the bill form and generate a bill
  statement    save the current bill as a statement file
  history      show the calculation history
  summary      show history totals
  export-csv   export history to CSV
  export-txt   export history to a text report
  clear        clear the calculation history
  reset        clear the form
  help         show this help
  logout       leave the session";

/// Line-oriented input/output shared by the shell and its prompts
pub struct Console<R, W> {
    input: RefCell<R>,
    output: RefCell<W>,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input: RefCell::new(input),
            output: RefCell::new(output),
        }
    }

    pub fn say(&self, text: &str) -> io::Result<()> {
        let mut out = self.output.borrow_mut();
        writeln!(out, "{text}")?;
        out.flush()
    }

    /// Print `label` and read one line. `None` on end of input.
    pub fn ask(&self, label: &str) -> io::Result<Option<String>> {
        {
            let mut out = self.output.borrow_mut();
            write!(out, "{label}")?;
            out.flush()?;
        }
        let mut line = String::new();
        if self.input.borrow_mut().read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    /// Ask for a field, keeping `current` when the answer is blank
    fn ask_field(&self, label: &str, current: &str) -> io::Result<Option<String>> {
        let answer = self.ask(&format!("{label} [{current}]: "))?;
        Ok(answer.map(|a| {
            let a = a.trim();
            if a.is_empty() {
                current.to_string()
            } else {
                a.to_string()
            }
        }))
    }

    fn confirm(&self, question: &str) -> bool {
        matches!(
            self.ask(&format!("{question} [y/N] ")),
            Ok(Some(answer)) if matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
        )
    }
}

impl<R: BufRead, W: Write> SavePrompt for Console<R, W> {
    fn ask_save_path(&self, suggested_name: &str, _extension: &str) -> Option<PathBuf> {
        let answer = self
            .ask(&format!("Save as [{suggested_name}] (\"cancel\" to abort): "))
            .ok()??;
        match answer.trim() {
            "" => Some(PathBuf::from(suggested_name)),
            "cancel" => None,
            path => Some(PathBuf::from(path)),
        }
    }
}

pub struct Shell<R, W> {
    console: Console<R, W>,
    session: BillingSession,
    form: BillForm,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(console: Console<R, W>, session: BillingSession, billing_month: String) -> Self {
        Self {
            console,
            session,
            form: BillForm {
                billing_month,
                ..BillForm::default()
            },
        }
    }

    pub fn session(&self) -> &BillingSession {
        &self.session
    }

    /// Run until `logout` or end of input
    pub fn run(&mut self) -> io::Result<()> {
        self.console.say("Electric Bill Calculator")?;
        self.console.say("Type \"help\" for the list of commands.")?;

        while let Some(line) = self.console.ask("> ")? {
            match line.trim() {
                "" => {}
                "generate" | "g" => self.generate()?,
                "statement" | "pdf" => self.statement()?,
                "history" => {
                    self.console.say(&self.session.history_view())?;
                    self.console.say(&self.session.summary_line())?;
                }
                "summary" => self.console.say(&self.session.summary_line())?,
                "export-csv" => {
                    let outcome = self.session.export_csv(&self.console);
                    self.report(outcome, "CSV")?;
                }
                "export-txt" => {
                    let outcome = self.session.export_text(&self.console);
                    self.report(outcome, "TXT")?;
                }
                "clear" => {
                    let console = &self.console;
                    let removed = self.session.clear_history(|| {
                        console.confirm("Are you sure you want to clear all calculation history?")
                    });
                    if removed > 0 {
                        self.console.say(&format!("Cleared {removed} record(s)."))?;
                    }
                }
                "reset" => {
                    self.form.clear();
                    self.console.say("Form cleared.")?;
                }
                "help" | "?" => self.console.say(HELP)?,
                "logout" | "quit" | "exit" => break,
                other => self
                    .console
                    .say(&format!("Unknown command: {other}. Type \"help\" for the list."))?,
            }
        }
        Ok(())
    }

    /// Walk through every form field. Returns false on end of input.
    fn fill_form(&mut self) -> io::Result<bool> {
        let c = &self.console;
        let f = &mut self.form;

        macro_rules! field {
            ($label:expr, $current:expr) => {
                match c.ask_field($label, $current)? {
                    Some(v) => v,
                    None => return Ok(false),
                }
            };
        }

        f.customer_name = field!("Customer Name", &f.customer_name);
        f.account = field!("Account Number", &f.account);
        f.address = field!("Address", &f.address);

        let class = field!("Customer Type (residential/commercial)", f.customer_class.as_str());
        match class.parse::<CustomerClass>() {
            Ok(v) => f.customer_class = v,
            Err(e) => c.say(&format!("{e}; keeping {}", f.customer_class.label()))?,
        }

        let discount = field!("Discount (none/senior)", f.discount.label());
        match discount.parse::<DiscountType>() {
            Ok(v) => f.discount = v,
            Err(e) => c.say(&format!("{e}; keeping {}", f.discount.label()))?,
        }

        f.billing_month = field!("Billing Month", &f.billing_month);
        f.usage = field!("kWh Used", &f.usage);
        Ok(true)
    }

    fn generate(&mut self) -> io::Result<()> {
        if !self.fill_form()? {
            return Ok(());
        }
        match self.session.generate(&self.form) {
            Ok(generated) => {
                self.console.say(&generated.statement)?;
                self.console.say(&self.session.summary_line())
            }
            Err(AppError::Domain(e)) => self
                .console
                .say(&format!("Error: {e}. Please enter a valid number.")),
            Err(e) => self.console.say(&format!("Error: {e}")),
        }
    }

    fn statement(&mut self) -> io::Result<()> {
        if self.form.usage.trim().is_empty() && !self.fill_form()? {
            return Ok(());
        }
        match self.session.download_statement(&self.form, &self.console) {
            Ok(ActionOutcome::Written { path, .. }) => self
                .console
                .say(&format!("Statement saved to:\n{}", path.display())),
            Ok(ActionOutcome::Notice(msg)) => self.console.say(&msg),
            Ok(ActionOutcome::Cancelled) => Ok(()),
            Err(e) => self.console.say(&format!("Error: {e}")),
        }
    }

    fn report(&self, outcome: Result<ActionOutcome, AppError>, kind: &str) -> io::Result<()> {
        match outcome {
            Ok(ActionOutcome::Written { path, records }) => self.console.say(&format!(
                "{kind} exported to:\n{} ({records} record(s))",
                path.display()
            )),
            Ok(ActionOutcome::Notice(msg)) => self.console.say(&msg),
            Ok(ActionOutcome::Cancelled) => Ok(()),
            Err(e) => self.console.say(&format!("Failed to export {kind}:\n{e}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use electric_bill::AppConfig;
    use std::io::Cursor;

    fn run(script: &str) -> (String, usize) {
        let console = Console::new(Cursor::new(script.as_bytes().to_vec()), Vec::new());
        let session = BillingSession::from_config(&AppConfig::default());
        let mut shell = Shell::new(console, session, "October 2026".into());
        shell.run().unwrap();
        let records = shell.session().ledger().len();
        let output = String::from_utf8(shell.console.output.into_inner()).unwrap();
        (output, records)
    }

    #[test]
    fn generate_prints_statement_and_records_history() {
        let script = "generate\nMaria\nACC-1\nQuezon City\nresidential\nsenior\n\n120\nlogout\n";
        let (out, records) = run(script);
        assert!(out.contains("TOTAL AMOUNT DUE: ₱821.79"));
        assert!(out.contains("Total Calculations: 1 | Total kWh: 120.00 | Total Cost: ₱821.79"));
        assert_eq!(records, 1);
    }

    #[test]
    fn invalid_usage_reports_error() {
        let script = "generate\nMaria\nACC-1\nQC\n\n\n\nlots\n";
        let (out, records) = run(script);
        assert!(out.contains("Error: Invalid kWh input"));
        assert_eq!(records, 0);
    }

    #[test]
    fn export_with_empty_history_shows_notice() {
        let (out, _) = run("export-csv\n");
        assert!(out.contains("No calculation history to export."));
    }

    #[test]
    fn clear_needs_yes() {
        let script = "generate\nA\nB\nC\n\n\n\n30\nclear\nn\nclear\ny\n";
        let (out, records) = run(script);
        assert!(out.contains("Cleared 1 record(s)."));
        assert_eq!(records, 0);
    }

    #[test]
    fn export_csv_to_chosen_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("h.csv");
        let script = format!(
            "generate\nA\nB\nC\ncommercial\nnone\n\n0\nexport-csv\n{}\n",
            path.display()
        );
        let (out, _) = run(&script);
        assert!(out.contains("CSV exported to:"));
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains(",0,100.00,commercial,None,0.00,October 2026"));
    }
}
