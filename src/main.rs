use std::fmt::Display;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::PathBuf;

use log::{error, info};

use iran_offdays::config::Config;
use iran_offdays::IranianHolidayCalendar;

/// Copies log output to stderr and the log file
struct LogTee {
    file: File,
}

impl Write for LogTee {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        io::stderr().write_all(buf)?;
        self.file.write_all(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        io::stderr().flush()?;
        self.file.flush()
    }
}

fn init_logging(log_file: &Option<PathBuf>) {
    let mut builder = pretty_env_logger::formatted_timed_builder();
    let filters = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    builder.parse_filters(&filters);

    let mut file_error = None;
    if let Some(path) = log_file {
        match OpenOptions::new().create(true).append(true).open(path) {
            Ok(file) => {
                builder.target(env_logger::Target::Pipe(Box::new(LogTee { file })));
            }
            Err(err) => file_error = Some((path, err)),
        }
    }
    builder.init();

    if let Some((path, err)) = file_error {
        error!("Could not open log file {}: {}", path.display(), err);
    }
}

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = match Config::from_args(&args) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{}", failure_line("خطا در تنظیمات", "Configuration error", &err));
            eprintln!("usage: iran_offdays [YEAR] [CONFIG.json]");
            std::process::exit(2);
        }
    };
    init_logging(&config.log_file);

    if !run(&config) {
        std::process::exit(1);
    }
}

/// Bilingual line reporting a failed step
fn failure_line(persian: &str, english: &str, err: &dyn Display) -> String {
    format!("❌ {} / {}: {}", persian, english, err)
}

/// Runs all steps, returns false if any step failed
fn run(config: &Config) -> bool {
    let provider = match config.provider() {
        Ok(provider) => provider,
        Err(err) => {
            error!("Holiday data unavailable: {}", err);
            let line = failure_line("داده تعطیلات در دسترس نیست", "Holiday data unavailable", &err);
            println!("{}", line);
            return false;
        }
    };
    let mut calendar =
        IranianHolidayCalendar::with_labels(config.year, provider, config.labels.clone());

    if let Err(err) = calendar.generate_off_days() {
        println!("{}", failure_line("خطا در تولید تقویم", "Generating the calendar failed", &err));
        return false;
    }
    let mut success = true;

    if let Err(err) = calendar.print_calendar(config.show_persian_names) {
        error!("Printing the calendar failed: {}", err);
        println!("{}", failure_line("خطا در نمایش تقویم", "Printing the calendar failed", &err));
        success = false;
    }
    if let Err(err) = calendar.print_statistics() {
        error!("Printing the statistics failed: {}", err);
        println!("{}", failure_line("خطا در نمایش آمار", "Printing the statistics failed", &err));
        success = false;
    }

    match calendar.save_to_csv(Some(config.csv_path().as_path())) {
        Ok(path) => println!("✅ فایل CSV ذخیره شد / CSV saved: {}", path.display()),
        Err(err) => {
            println!("{}", failure_line("خطا در ذخیره CSV", "Saving CSV failed", &err));
            success = false;
        }
    }
    match calendar.save_to_json(Some(config.json_path().as_path())) {
        Ok(path) => println!("✅ فایل JSON ذخیره شد / JSON saved: {}", path.display()),
        Err(err) => {
            println!("{}", failure_line("خطا در ذخیره JSON", "Saving JSON failed", &err));
            success = false;
        }
    }

    if let Ok(stats) = calendar.statistics() {
        println!();
        println!("🔍 Example queries:");
        println!("   Total working days in {}: {}", config.year, stats.working_days);
        println!("   Total holidays: {}", stats.official_holidays);
    }
    info!("Finished off-day calendar for {}", config.year);
    success
}
