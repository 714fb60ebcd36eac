use log::info;
use web_sys::{window, HtmlFormElement, HtmlInputElement};
use yew::prelude::*;

pub const SUCCESS_MESSAGE: &str =
    "Thank you! Your message has been received. We'll contact you shortly.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
}

impl Field {
    pub fn prompt(&self) -> &'static str {
        match self {
            Field::Name => "Please enter your name.",
            Field::Email => "Please enter your email.",
        }
    }
}

/// Checks name then email. Absent fields are skipped; the first blank one
/// is reported.
pub fn validate(name: Option<&str>, email: Option<&str>) -> Result<(), Field> {
    if name.map_or(false, |v| v.trim().is_empty()) {
        return Err(Field::Name);
    }
    if email.map_or(false, |v| v.trim().is_empty()) {
        return Err(Field::Email);
    }
    Ok(())
}

/// What submitting needs from the rendered form.
pub trait FormView {
    fn value(&self, field: Field) -> Option<String>;
    fn alert(&self, message: &str);
    fn focus(&self, field: Field);
    fn reset(&self);
}

/// Validates and acknowledges a submission. Nothing is sent anywhere.
pub fn submit(form: &impl FormView) -> Result<(), Field> {
    let name = form.value(Field::Name);
    let email = form.value(Field::Email);
    match validate(name.as_deref(), email.as_deref()) {
        Err(field) => {
            form.alert(field.prompt());
            form.focus(field);
            Err(field)
        }
        Ok(()) => {
            form.alert(SUCCESS_MESSAGE);
            form.reset();
            Ok(())
        }
    }
}

struct DomForm<'a> {
    form: &'a NodeRef,
    name: &'a NodeRef,
    email: &'a NodeRef,
}

impl DomForm<'_> {
    fn input(&self, field: Field) -> Option<HtmlInputElement> {
        match field {
            Field::Name => self.name.cast(),
            Field::Email => self.email.cast(),
        }
    }
}

impl FormView for DomForm<'_> {
    fn value(&self, field: Field) -> Option<String> {
        self.input(field).map(|input| input.value())
    }

    fn alert(&self, message: &str) {
        if let Some(window) = window() {
            let _ = window.alert_with_message(message);
        }
    }

    fn focus(&self, field: Field) {
        if let Some(input) = self.input(field) {
            let _ = input.focus();
        }
    }

    fn reset(&self) {
        if let Some(form) = self.form.cast::<HtmlFormElement>() {
            form.reset();
        }
    }
}

#[function_component(ContactForm)]
pub fn contact_form() -> Html {
    let form = use_node_ref();
    let name = use_node_ref();
    let email = use_node_ref();

    let onsubmit = {
        let (form, name, email) = (form.clone(), name.clone(), email.clone());
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let view = DomForm {
                form: &form,
                name: &name,
                email: &email,
            };
            if submit(&view).is_ok() {
                info!("Contact form acknowledged");
            }
        })
    };

    html! {
        <section id="contact" class="contact">
            <h2>{"Get in Touch"}</h2>
            <form class="contact-form" ref={form} {onsubmit}>
                <input type="text" name="name" placeholder="Your name" ref={name} />
                <input type="email" name="email" placeholder="Your email" ref={email} />
                <textarea name="message" rows="5" placeholder="How can we help?"></textarea>
                <button type="submit" class="cta-button">{"Send Message"}</button>
            </form>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct FakeForm {
        name: RefCell<Option<String>>,
        email: RefCell<Option<String>>,
        alerts: RefCell<Vec<String>>,
        focused: RefCell<Option<Field>>,
    }

    impl FakeForm {
        fn filled(name: &str, email: &str) -> Self {
            Self {
                name: RefCell::new(Some(name.into())),
                email: RefCell::new(Some(email.into())),
                ..Default::default()
            }
        }
    }

    impl FormView for FakeForm {
        fn value(&self, field: Field) -> Option<String> {
            match field {
                Field::Name => self.name.borrow().clone(),
                Field::Email => self.email.borrow().clone(),
            }
        }

        fn alert(&self, message: &str) {
            self.alerts.borrow_mut().push(message.to_string());
        }

        fn focus(&self, field: Field) {
            *self.focused.borrow_mut() = Some(field);
        }

        fn reset(&self) {
            for value in [&self.name, &self.email] {
                if let Some(v) = value.borrow_mut().as_mut() {
                    v.clear();
                }
            }
        }
    }

    #[test]
    fn blank_name_is_reported_first() {
        let form = FakeForm::filled("   ", "");
        assert_eq!(submit(&form), Err(Field::Name));
        assert_eq!(*form.alerts.borrow(), vec!["Please enter your name."]);
        assert_eq!(*form.focused.borrow(), Some(Field::Name));
        assert!(!form.alerts.borrow().iter().any(|a| a == SUCCESS_MESSAGE));
    }

    #[test]
    fn blank_email_is_reported_after_name() {
        let form = FakeForm::filled("Ada", " \t");
        assert_eq!(submit(&form), Err(Field::Email));
        assert_eq!(*form.alerts.borrow(), vec!["Please enter your email."]);
        assert_eq!(*form.focused.borrow(), Some(Field::Email));
        assert_eq!(form.value(Field::Name).as_deref(), Some("Ada"));
    }

    #[test]
    fn filled_form_is_acknowledged_and_cleared() {
        let form = FakeForm::filled("Ada", "ada@example.com");
        assert_eq!(submit(&form), Ok(()));
        assert_eq!(*form.alerts.borrow(), vec![SUCCESS_MESSAGE]);
        assert_eq!(form.value(Field::Name).as_deref(), Some(""));
        assert_eq!(form.value(Field::Email).as_deref(), Some(""));
        assert_eq!(*form.focused.borrow(), None);
    }

    #[test]
    fn missing_fields_are_not_checked() {
        assert_eq!(validate(None, None), Ok(()));
        assert_eq!(validate(None, Some("")), Err(Field::Email));
        assert_eq!(validate(Some("Ada"), None), Ok(()));
    }
}
