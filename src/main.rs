use gettextrs::{LocaleCategory, bindtextdomain, setlocale, textdomain};
use memory_match::config::GameConfig;
use memory_match::{logging, ui};

const GETTEXT_PACKAGE: &str = "memory-match";
const LOCALEDIR: &str = match option_env!("LOCALEDIR") {
    Some(dir) => dir,
    None => "/usr/share/locale",
};

fn main() -> glib::ExitCode {
    logging::init();

    setlocale(LocaleCategory::LcAll, "");
    if let Err(err) = bindtextdomain(GETTEXT_PACKAGE, LOCALEDIR) {
        tracing::warn!(error = %err, "failed to bind text domain");
    }
    if let Err(err) = textdomain(GETTEXT_PACKAGE) {
        tracing::warn!(error = %err, "failed to select text domain");
    }

    let path = GameConfig::path_from_env().unwrap_or_else(ui::user_config_path);
    let config = GameConfig::load_or_default(Some(&path));

    ui::run(config)
}
