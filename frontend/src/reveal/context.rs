use std::cell::RefCell;
use std::rc::Rc;

use log::{info, warn};
use web_sys::Element;
use yew::prelude::*;

use super::observer::RevealObserver;
use super::policy::RevealPolicy;
use super::tracker::{TrackerAction, VisibilityTracker};

enum ObserverSlot {
    /// Nothing registered yet; the observer is created on first use.
    Pending,
    Active(RevealObserver),
    /// The browser refused to build an observer. Targets reveal on register.
    Unsupported,
    Closed,
}

/// Read handle plus registration hooks handed to every reveal target.
#[derive(Clone)]
pub struct RevealContext {
    state: UseReducerHandle<VisibilityTracker>,
    slot: Rc<RefCell<ObserverSlot>>,
    policy: Rc<RevealPolicy>,
}

impl PartialEq for RevealContext {
    fn eq(&self, other: &Self) -> bool {
        *self.state == *other.state && Rc::ptr_eq(&self.slot, &other.slot)
    }
}

impl RevealContext {
    pub fn is_revealed(&self, id: &str) -> bool {
        self.state.is_revealed(id)
    }

    pub fn register(&self, id: &str, element: &Element) {
        let mut slot = self.slot.borrow_mut();
        if let ObserverSlot::Pending = *slot {
            let dispatcher = self.state.dispatcher();
            *slot = match RevealObserver::new(&self.policy, move |batch| {
                dispatcher.dispatch(TrackerAction::Observe(batch))
            }) {
                Ok(observer) => ObserverSlot::Active(observer),
                Err(e) => {
                    warn!("IntersectionObserver unavailable, revealing everything: {:?}", e);
                    self.state.dispatch(TrackerAction::RevealAll);
                    ObserverSlot::Unsupported
                }
            };
        }

        match &*slot {
            ObserverSlot::Active(observer) => {
                self.state.dispatch(TrackerAction::Register(id.to_string()));
                observer.observe(id, element);
            }
            ObserverSlot::Unsupported => {
                self.state
                    .dispatch(TrackerAction::RegisterRevealed(id.to_string()));
            }
            ObserverSlot::Pending | ObserverSlot::Closed => {}
        }
    }

    pub fn unregister(&self, id: &str, element: Option<&Element>) {
        if let (ObserverSlot::Active(observer), Some(element)) = (&*self.slot.borrow(), element) {
            observer.unobserve(element);
        }
        self.state
            .dispatch(TrackerAction::Unregister(id.to_string()));
    }
}

/// Owns the page's tracker. The observer is released when the calling
/// component unmounts.
#[hook]
pub fn use_reveal_tracker(policy: RevealPolicy) -> RevealContext {
    let state = use_reducer(VisibilityTracker::new);
    let slot = use_mut_ref(|| ObserverSlot::Pending);
    let policy = use_memo(|policy| policy.clone(), policy);

    {
        let slot = slot.clone();
        let dispatcher = state.dispatcher();
        use_effect_with_deps(
            move |_| {
                move || {
                    // Drop disconnects the observer before anything else runs.
                    *slot.borrow_mut() = ObserverSlot::Closed;
                    dispatcher.dispatch(TrackerAction::Teardown);
                    info!("reveal tracker torn down");
                }
            },
            (),
        );
    }

    RevealContext {
        state,
        slot,
        policy,
    }
}

#[derive(Properties, PartialEq)]
pub struct RevealProviderProps {
    pub policy: RevealPolicy,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(RevealProvider)]
pub fn reveal_provider(props: &RevealProviderProps) -> Html {
    let context = use_reveal_tracker(props.policy.clone());

    html! {
        <ContextProvider<RevealContext> context={context}>
            { for props.children.iter() }
        </ContextProvider<RevealContext>>
    }
}

/// Registers the element behind `node` under `id` for as long as the calling
/// component is mounted, and reports whether it has been revealed.
///
/// Outside a `RevealProvider` everything reads as revealed.
#[hook]
pub fn use_reveal(id: AttrValue, node: NodeRef) -> bool {
    let context = use_context::<RevealContext>();

    {
        let context = context.clone();
        use_effect_with_deps(
            move |id: &AttrValue| {
                let id = id.to_string();
                let element = node.cast::<Element>();
                if let (Some(context), Some(element)) = (context.as_ref(), element.as_ref()) {
                    context.register(&id, element);
                }
                move || {
                    if let Some(context) = context {
                        context.unregister(&id, element.as_ref());
                    }
                }
            },
            id.clone(),
        );
    }

    context.map(|c| c.is_revealed(&id)).unwrap_or(true)
}
