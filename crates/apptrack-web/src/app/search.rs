use std::cell::RefCell;
use std::rc::Rc;

use apptrack_core::config::PageContext;
use apptrack_core::debounce::Debouncer;
use gloo::events::EventListener;
use gloo::timers::callback::Timeout;
use tracing::{
  debug,
  warn
};
use wasm_bindgen::JsCast;
use web_sys::{
  Document,
  HtmlInputElement
};

pub fn attach(
  document: &Document,
  ctx: &Rc<PageContext>
) {
  let Some(input) = document
    .get_element_by_id(
      &ctx.config.search_input_id
    )
    .and_then(|element| {
      element
        .dyn_into::<HtmlInputElement>()
        .ok()
    })
  else {
    return;
  };

  let debouncer = Rc::new(RefCell::new(
    Debouncer::new(
      ctx.config.search_debounce_ms
    )
  ));
  // Replacing the handle cancels the
  // previous timer.
  let pending: Rc<RefCell<Option<Timeout>>> =
    Rc::new(RefCell::new(None));

  let source = input.clone();
  EventListener::new(
    &input,
    "input",
    move |_| {
      let ticket =
        debouncer.borrow_mut().arm();
      let delay =
        debouncer.borrow().delay_ms();
      let debouncer = Rc::clone(&debouncer);
      let input = source.clone();

      let timer = Timeout::new(delay, move || {
        if !debouncer.borrow_mut().fire(ticket)
        {
          return;
        }
        let Some(form) = input.form() else {
          warn!(
            "search input is not inside a \
             form"
          );
          return;
        };
        debug!("submitting search");
        if let Err(error) = form.submit() {
          warn!(?error, "search submit failed");
        }
      });
      pending.borrow_mut().replace(timer);
    }
  )
  .forget();
}
