use gettextrs::LocaleCategory;
use matching_game::{config, ui};
use tracing::warn;
use tracing_subscriber::EnvFilter;

const GETTEXT_PACKAGE: &str = "matching-game";
const LOCALEDIR: &str = "/usr/share/locale";

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn init_gettext() {
    gettextrs::setlocale(LocaleCategory::LcAll, "");
    if let Err(err) = gettextrs::bindtextdomain(GETTEXT_PACKAGE, LOCALEDIR) {
        warn!(error = %err, "could not bind text domain");
        return;
    }
    if let Err(err) = gettextrs::bind_textdomain_codeset(GETTEXT_PACKAGE, "UTF-8") {
        warn!(error = %err, "could not set text domain codeset");
    }
    if let Err(err) = gettextrs::textdomain(GETTEXT_PACKAGE) {
        warn!(error = %err, "could not select text domain");
    }
}

fn main() -> glib::ExitCode {
    init_logging();
    init_gettext();
    let settings = config::load_settings();
    ui::app::run(settings)
}
