//! Navigation stack over the password menus.
//!
//! The navigator owns a stack of [`MenuFrame`]s. Each [`step`] shows the menu
//! of the top frame once and acts on the answer: push a sub-menu, pop on
//! Back, or dispatch an action handler. Exit and cancellation surface as
//! [`Error::Cancelled`] and unwind the whole run.
//!
//! [`step`]: MenuNavigator::step

use log::{debug, info, warn};

use crate::{
    constants::{ROOT_PROMPT, SECRETS_PROMPT},
    error::{Error, Result, StoreError},
    menu::{list_choice_menu, select_paginated, Choice, MenuOptions, Selection},
    store::SecretStore,
    tui::{screens, Frontend, Notice},
};

/// One level of the menu hierarchy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuFrame {
    /// Main menu
    Root,
    /// Paged list of password keys
    Secrets,
    /// Actions on one password
    Secret { key: String },
}

/// Main menu actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RootAction {
    ListSecrets,
    CreateSecret,
}

impl RootAction {
    pub const fn label(self) -> &'static str {
        match self {
            Self::ListSecrets => "List passwords",
            Self::CreateSecret => "Create a new password",
        }
    }
}

/// Actions on a single password.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemAction {
    Retrieve,
    Update,
    Delete,
}

impl ItemAction {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Retrieve => "Retrieve password value",
            Self::Update => "Update password value",
            Self::Delete => "Delete password",
        }
    }
}

type RootHandler<S, F> = fn(&mut MenuNavigator<S, F>) -> Result<()>;
type ItemHandler<S, F> = fn(&mut MenuNavigator<S, F>, &str) -> Result<()>;

/// Drives the password menus against a store.
pub struct MenuNavigator<S, F> {
    store: S,
    frontend: F,
    stack: Vec<MenuFrame>,
    root_actions: Vec<(RootAction, RootHandler<S, F>)>,
    item_actions: Vec<(ItemAction, ItemHandler<S, F>)>,
}

impl<S: SecretStore, F: Frontend> MenuNavigator<S, F> {
    pub fn new(store: S, frontend: F) -> Self {
        let root_actions = vec![
            (RootAction::ListSecrets, Self::open_secrets as RootHandler<S, F>),
            (RootAction::CreateSecret, Self::create_secret as RootHandler<S, F>),
        ];
        let item_actions = vec![
            (ItemAction::Retrieve, Self::retrieve_secret as ItemHandler<S, F>),
            (ItemAction::Update, Self::update_secret as ItemHandler<S, F>),
            (ItemAction::Delete, Self::delete_secret as ItemHandler<S, F>),
        ];

        Self {
            store,
            frontend,
            stack: vec![MenuFrame::Root],
            root_actions,
            item_actions,
        }
    }

    pub fn stack(&self) -> &[MenuFrame] {
        &self.stack
    }

    pub const fn store(&self) -> &S {
        &self.store
    }

    pub const fn frontend(&self) -> &F {
        &self.frontend
    }

    pub fn frontend_mut(&mut self) -> &mut F {
        &mut self.frontend
    }

    pub fn into_parts(self) -> (S, F) {
        (self.store, self.frontend)
    }

    /// Run until the stack is empty or an error unwinds.
    ///
    /// The root menu offers no Back entry, so in practice this ends with
    /// [`Error::Cancelled`] when the user quits.
    pub fn run(&mut self) -> Result<()> {
        while !self.stack.is_empty() {
            self.step()?;
        }
        Ok(())
    }

    /// Show the top frame's menu once and act on the answer.
    pub fn step(&mut self) -> Result<()> {
        let Some(frame) = self.stack.last().cloned() else {
            return Ok(());
        };
        debug!("menu frame {frame:?} (depth {})", self.stack.len());

        match frame {
            MenuFrame::Root => self.root_menu(),
            MenuFrame::Secrets => self.secrets_menu(),
            MenuFrame::Secret { key } => self.secret_menu(&key),
        }
    }

    fn root_menu(&mut self) -> Result<()> {
        let choices = self
            .root_actions
            .iter()
            .map(|&(action, _)| Choice::new(action.label(), action))
            .collect();
        let header = self.store.description();

        let selection = list_choice_menu(
            &mut self.frontend,
            ROOT_PROMPT,
            Some(&header),
            choices,
            &MenuOptions::root(),
            None,
        )?;
        let Selection::Item(action) = selection else {
            return Ok(());
        };

        let handler = self
            .root_actions
            .iter()
            .find(|(a, _)| *a == action)
            .map(|&(_, handler)| handler);
        if let Some(handler) = handler {
            info!("root action {action:?}");
            let result = handler(self);
            self.recover(result)?;
        }
        Ok(())
    }

    fn secrets_menu(&mut self) -> Result<()> {
        let selection = match self.store.list_keys() {
            Ok(page) if page.items.is_empty() && !page.has_next() => {
                self.stack.pop();
                self.frontend.notify(Notice::info("No passwords stored yet"));
                return Ok(());
            }
            Ok(page) => select_paginated(
                &mut self.frontend,
                SECRETS_PROMPT,
                None,
                page,
                &MenuOptions::nested(),
            ),
            Err(err) => Err(err.into()),
        };

        match selection {
            Ok(Selection::Item(key)) => {
                self.stack.push(MenuFrame::Secret { key });
                Ok(())
            }
            Ok(Selection::Back) => {
                self.stack.pop();
                Ok(())
            }
            Err(Error::Store(err)) => {
                // Listing failed: fall back to the parent menu
                self.stack.pop();
                self.report(&err);
                Ok(())
            }
            Err(err) => Err(err),
        }
    }

    fn secret_menu(&mut self, key: &str) -> Result<()> {
        let choices = self
            .item_actions
            .iter()
            .map(|&(action, _)| Choice::new(action.label(), action))
            .collect();
        let prompt = format!("What do you want to do with this password ({key})?");

        let selection = list_choice_menu(
            &mut self.frontend,
            &prompt,
            None,
            choices,
            &MenuOptions::nested(),
            None,
        )?;
        let action = match selection {
            Selection::Item(action) => action,
            Selection::Back => {
                self.stack.pop();
                return Ok(());
            }
        };

        let handler = self
            .item_actions
            .iter()
            .find(|(a, _)| *a == action)
            .map(|&(_, handler)| handler);
        if let Some(handler) = handler {
            info!("action {action:?} on {key}");
            let result = handler(self, key);
            self.recover(result)?;
        }
        Ok(())
    }

    /// Report store failures inline; everything else keeps unwinding.
    fn recover(&mut self, result: Result<()>) -> Result<()> {
        match result {
            Err(Error::Store(err)) => {
                self.report(&err);
                Ok(())
            }
            other => other,
        }
    }

    fn report(&mut self, err: &StoreError) {
        warn!("store operation failed: {err}");
        self.frontend.notify(Notice::error(err.to_string()));
    }

    // =========================================================================
    // Handlers
    // =========================================================================

    fn open_secrets(&mut self) -> Result<()> {
        self.stack.push(MenuFrame::Secrets);
        Ok(())
    }

    fn create_secret(&mut self) -> Result<()> {
        let key = screens::prompt_text(&mut self.frontend, "Name of the new password", "Name")?;
        let value = screens::prompt_secret(
            &mut self.frontend,
            &format!("Value of password {key}"),
            "Value",
        )?;
        self.store.create(&key, &value)?;
        self.frontend
            .notify(Notice::success(format!("Password {key} created")));
        Ok(())
    }

    fn retrieve_secret(&mut self, key: &str) -> Result<()> {
        let value = self.store.get(key)?;
        self.frontend
            .notify(Notice::info(format!("Password {key}: {value}")));
        Ok(())
    }

    fn update_secret(&mut self, key: &str) -> Result<()> {
        let value = screens::prompt_secret(
            &mut self.frontend,
            &format!("New value of password {key}"),
            "Value",
        )?;
        self.store.update(key, &value)?;
        self.frontend
            .notify(Notice::success(format!("Password {key} updated")));
        Ok(())
    }

    fn delete_secret(&mut self, key: &str) -> Result<()> {
        let confirmed = screens::confirm(
            &mut self.frontend,
            &format!("Delete password {key}?"),
            false,
        )?;
        if !confirmed {
            debug!("deletion of {key} declined");
            return Ok(());
        }
        self.store.delete(key)?;
        self.frontend
            .notify(Notice::success(format!("Password {key} deleted")));
        Ok(())
    }
}
