// Prevents additional console window on Windows in release
#![cfg_attr(
    all(not(debug_assertions), target_os = "windows"),
    windows_subsystem = "windows"
)]

fn main() {
    // The only flag the glue layer knows about; anything else on the
    // command line belongs to the application.
    let debug = patchgrid_lib::logging::debug_flag_present(std::env::args().skip(1));
    patchgrid_lib::logging::set_debug(debug);

    patchgrid_lib::run();
}
