//! Router tests driving requests through the full middleware stack.
