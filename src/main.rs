mod app_core;
mod app_router;
mod app_runtime;
mod boot;
mod effects;
mod input;
mod yew_app;

fn main() {
    console_error_panic_hook::set_once();
    boot::set_phase("config");
    app_runtime::set_init_config(app_router::load_init_config());
    boot::set_phase("quiz");
    let core = app_runtime::shared_core();
    if !yew_app::run(core) {
        gloo::console::error!("quiz root element missing, nothing rendered");
        boot::fail("quiz root element missing");
        return;
    }
    boot::ready();
}
