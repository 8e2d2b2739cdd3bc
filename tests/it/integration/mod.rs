//! Multi-component workflow tests.

mod workspace_workflow_tests;
