//! Unit tests for the task flow domain, presentation, and services.
