//! # Session: who is signed in
//!
//! [`Session`] is the single source of truth for the current user on the client. It is
//! created once by the UI, restored from the backend on startup, and handed to pages
//! through the component context. Every identity change (restore, login, register,
//! logout) is pushed to the listeners registered with [`Session::subscribe`].
//!
//! The session lives on the UI thread only, so clones share state through
//! `Rc<RefCell<_>>`. Listeners are called after the internal borrow is released and may
//! read the session again.

use std::cell::RefCell;
use std::rc::Rc;

use crate::backend::AuthBackend;
use crate::error::Error;
use crate::models::{RegistrationForm, User};

type Listener = Rc<dyn Fn(Option<&User>)>;

#[derive(Default)]
struct Inner {
    user: Option<User>,
    restored: bool,
    listeners: Vec<Listener>,
}

pub struct Session<B> {
    backend: Rc<B>,
    inner: Rc<RefCell<Inner>>,
}

impl<B> Clone for Session<B> {
    fn clone(&self) -> Self {
        Self {
            backend: self.backend.clone(),
            inner: self.inner.clone(),
        }
    }
}

impl<B: AuthBackend> Session<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend: Rc::new(backend),
            inner: Rc::new(RefCell::new(Inner::default())),
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn user(&self) -> Option<User> {
        self.inner.borrow().user.clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.inner.borrow().user.is_some()
    }

    /// Whether [`restore`](Self::restore) has finished, successfully or not.
    pub fn is_restored(&self) -> bool {
        self.inner.borrow().restored
    }

    /// Register a callback fired on every identity change.
    pub fn subscribe(&self, listener: impl Fn(Option<&User>) + 'static) {
        self.inner.borrow_mut().listeners.push(Rc::new(listener));
    }

    /// Ask the backend for a persisted session. The session counts as restored even
    /// when this fails, in which case it stays signed out.
    pub async fn restore(&self) -> Result<Option<User>, Error> {
        let result = self.backend.current_user().await;
        let user = result.as_ref().ok().cloned().flatten();
        {
            let mut inner = self.inner.borrow_mut();
            inner.restored = true;
            inner.user = user;
        }
        self.notify();
        result
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<User, Error> {
        let user = self.backend.sign_in(email.trim(), password).await?;
        self.set_user(Some(user.clone()));
        Ok(user)
    }

    /// Validate the form, then create the account and sign it in.
    pub async fn register(&self, form: &RegistrationForm) -> Result<User, Error> {
        let profile = form.validate()?;
        let user = self
            .backend
            .sign_up(form.email.trim(), &form.password, &profile)
            .await?;
        self.set_user(Some(user.clone()));
        Ok(user)
    }

    /// Forget the user locally. Revoking the backend session is left to the caller
    /// through [`AuthBackend::sign_out`].
    pub fn logout(&self) {
        self.set_user(None);
    }

    fn set_user(&self, user: Option<User>) {
        self.inner.borrow_mut().user = user;
        self.notify();
    }

    fn notify(&self) {
        let (user, listeners) = {
            let inner = self.inner.borrow();
            (inner.user.clone(), inner.listeners.clone())
        };
        for listener in listeners {
            listener(user.as_ref());
        }
    }
}
