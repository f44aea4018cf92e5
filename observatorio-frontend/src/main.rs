use leptos::mount::mount_to_body;
use observatorio_frontend::RedirectView;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(RedirectView);
}
