mod api;
mod app;
mod interop;

fn main() {
  console_error_panic_hook::set_once();
  wasm_tracing::set_as_global_default();

  tracing::info!(
    "starting apptrack page script"
  );

  app::run_when_ready();
}
