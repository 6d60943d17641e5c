//! Chain of Responsibility
//!
//! A request is passed along a chain of handlers instead of being sent to one
//! specific receiver. Each handler either deals with it or forwards it to the
//! next link, until someone handles it or the chain runs out.
//!
//! Run with: cargo run --bin chain_of_responsibility

use crate::error::Result;
use crate::transcript::Transcript;

// ============================================================================
// Handler trait and the shared forwarding link
// ============================================================================

/// The successor slot every handler embeds.
#[derive(Default)]
pub struct Link {
    next: Option<Box<dyn Handler>>,
}

impl Link {
    pub fn set(&mut self, next: Box<dyn Handler>) -> &mut dyn Handler {
        &mut **self.next.insert(next)
    }

    pub fn forward(&self, request: i64) -> Option<String> {
        tracing::trace!(request, "forwarding request");
        self.next.as_ref().and_then(|next| next.handle(request))
    }
}

pub trait Handler {
    fn link(&self) -> &Link;
    fn link_mut(&mut self) -> &mut Link;

    /// Returns `None` when this handler does not take the request.
    fn try_handle(&self, request: i64) -> Option<String>;

    /// Stores the successor and returns it so chains can be built fluently.
    fn set_next(&mut self, next: Box<dyn Handler>) -> &mut dyn Handler {
        self.link_mut().set(next)
    }

    fn handle(&self, request: i64) -> Option<String> {
        self.try_handle(request)
            .or_else(|| self.link().forward(request))
    }
}

// ============================================================================
// Concrete handlers
// ============================================================================

#[derive(Default)]
pub struct ConcreteHandler1 {
    link: Link,
}

impl Handler for ConcreteHandler1 {
    fn link(&self) -> &Link {
        &self.link
    }

    fn link_mut(&mut self) -> &mut Link {
        &mut self.link
    }

    fn try_handle(&self, request: i64) -> Option<String> {
        (request < 10).then(|| format!("Handler 1: {}", request))
    }
}

#[derive(Default)]
pub struct ConcreteHandler2 {
    link: Link,
}

impl Handler for ConcreteHandler2 {
    fn link(&self) -> &Link {
        &self.link
    }

    fn link_mut(&mut self) -> &mut Link {
        &mut self.link
    }

    fn try_handle(&self, request: i64) -> Option<String> {
        (10..20)
            .contains(&request)
            .then(|| format!("Handler 2: {}", request))
    }
}

/// Terminal handler: accepts everything that reaches it.
#[derive(Default)]
pub struct DefaultHandler {
    link: Link,
}

impl Handler for DefaultHandler {
    fn link(&self) -> &Link {
        &self.link
    }

    fn link_mut(&mut self) -> &mut Link {
        &mut self.link
    }

    fn try_handle(&self, request: i64) -> Option<String> {
        Some(format!(
            "DefaultHandler: No handler could process {}",
            request
        ))
    }
}

pub fn demo() -> Result<Transcript> {
    let mut out = Transcript::new();

    let mut handler1 = ConcreteHandler1::default();
    handler1
        .set_next(Box::new(ConcreteHandler2::default()))
        .set_next(Box::new(DefaultHandler::default()));

    for request in 0..25 {
        if let Some(result) = handler1.handle(request) {
            out.line(result);
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_chain() -> ConcreteHandler1 {
        let mut head = ConcreteHandler1::default();
        head.set_next(Box::new(ConcreteHandler2::default()))
            .set_next(Box::new(DefaultHandler::default()));
        head
    }

    #[test]
    fn test_routing_by_range() {
        let chain = full_chain();
        assert_eq!(chain.handle(0).as_deref(), Some("Handler 1: 0"));
        assert_eq!(chain.handle(9).as_deref(), Some("Handler 1: 9"));
        assert_eq!(chain.handle(10).as_deref(), Some("Handler 2: 10"));
        assert_eq!(chain.handle(19).as_deref(), Some("Handler 2: 19"));
        assert_eq!(
            chain.handle(20).as_deref(),
            Some("DefaultHandler: No handler could process 20")
        );
    }

    #[test]
    fn test_unhandled_at_end_of_chain() {
        let mut head = ConcreteHandler1::default();
        head.set_next(Box::new(ConcreteHandler2::default()));
        assert_eq!(head.handle(42), None);
        assert_eq!(ConcreteHandler2::default().handle(3), None);
    }

    #[test]
    fn test_negative_requests_go_to_first_handler() {
        assert_eq!(full_chain().handle(-5).as_deref(), Some("Handler 1: -5"));
    }

    #[test]
    fn test_demo_transcript() {
        let transcript = demo().unwrap();
        let lines = transcript.lines();
        assert_eq!(lines.len(), 25);
        assert_eq!(lines[0], "Handler 1: 0");
        assert_eq!(lines[10], "Handler 2: 10");
        assert_eq!(lines[24], "DefaultHandler: No handler could process 24");
        assert_eq!(
            lines.iter().filter(|l| l.starts_with("Handler 2")).count(),
            10
        );
    }
}
