use dialoguer::console::style;

use common::router::menu;
use entity::User;

pub fn sidebar(user: &User, current: &str) -> String {
    let mut out = format!(
        "  {} {}\n\n",
        style("MusicFlow").magenta().bold(),
        style("Distribution").dim()
    );
    for item in menu(user.role) {
        if item.id == current {
            out.push_str(&format!(
                "  {} {}\n",
                style("▶").magenta(),
                style(item.label).bold()
            ));
        } else {
            out.push_str(&format!("    {}\n", item.label));
        }
    }
    out.push_str(&format!(
        "\n  {} {}  {}\n",
        style(format!("[{}]", user.avatar)).cyan(),
        user.name,
        style(user.role.label()).dim()
    ));
    out
}
