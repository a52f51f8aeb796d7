// OrgChart Desktop - Tauri shell
// Hosts the org chart front end and exposes the export commands.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

fn main() {
    orgchart_desktop_lib::run()
}
