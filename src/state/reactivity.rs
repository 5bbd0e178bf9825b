// ============================================================================
// REACTIVITY - Sistema de notificaciones/subscribers para reactividad
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

type Callback = Rc<dyn Fn()>;

/// Estado reactivo con sistema de notificaciones.
/// Los clones comparten valor y subscribers.
pub struct ReactiveState<T> {
    value: Rc<RefCell<T>>,
    subscribers: Rc<RefCell<Vec<Callback>>>,
}

impl<T> ReactiveState<T> {
    pub fn new(value: T) -> Self {
        Self {
            value: Rc::new(RefCell::new(value)),
            subscribers: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Establecer nuevo valor y notificar subscribers
    pub fn set(&self, new_value: T) {
        *self.value.borrow_mut() = new_value;
        self.notify();
    }

    pub fn subscribe<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.subscribers.borrow_mut().push(Rc::new(callback));
    }

    // Se copia la lista antes de llamar: un subscriber puede leer o suscribir
    fn notify(&self) {
        let callbacks: Vec<Callback> = self.subscribers.borrow().clone();
        for callback in callbacks {
            callback();
        }
    }
}

impl<T: Clone> ReactiveState<T> {
    pub fn value(&self) -> T {
        self.value.borrow().clone()
    }
}

impl<T> Clone for ReactiveState<T> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            subscribers: self.subscribers.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn set_notifies_every_subscriber() {
        let state = ReactiveState::new(1);
        let calls = Rc::new(Cell::new(0));
        for _ in 0..2 {
            let calls = calls.clone();
            state.subscribe(move || calls.set(calls.get() + 1));
        }

        state.set(5);
        assert_eq!(state.value(), 5);
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn clones_share_value_and_subscribers() {
        let state = ReactiveState::new("a".to_string());
        let clone = state.clone();
        let seen = Rc::new(RefCell::new(String::new()));
        {
            let seen = seen.clone();
            let reader = state.clone();
            clone.subscribe(move || *seen.borrow_mut() = reader.value());
        }

        state.set("b".to_string());
        assert_eq!(clone.value(), "b");
        assert_eq!(*seen.borrow(), "b");
    }
}
