use aptos_explorer::move_source::locate_function_line;

const ROUTER: &str = include_str!("fixtures/router.move");

#[test]
fn struct_is_not_a_function() {
    assert_eq!(locate_function_line(ROUTER, "TortugaSigner"), 0);
    assert_eq!(locate_function_line(ROUTER, "RouteConfig"), 0);
}

#[test]
fn private_function_is_not_located() {
    assert_eq!(locate_function_line(ROUTER, "assert_admin"), 0);
    assert_eq!(locate_function_line(ROUTER, "compute_fee"), 0);
}

#[test]
fn public_entry_function_on_one_line() {
    assert_eq!(locate_function_line(ROUTER, "create_tortuga_signer"), 32);
}

#[test]
fn longer_name_sharing_a_prefix() {
    assert_eq!(
        locate_function_line(ROUTER, "create_tortuga_signer_address"),
        28
    );
    assert_eq!(locate_function_line(ROUTER, "create_tortuga"), 0);
}

#[test]
fn public_entry_function_with_type_parameter() {
    assert_eq!(locate_function_line(ROUTER, "init_coin_store"), 38);
}

#[test]
fn entry_function_with_multi_line_type_parameters() {
    assert_eq!(locate_function_line(ROUTER, "two_step_route"), 44);
}

#[test]
fn public_function_with_multi_line_parameters() {
    assert_eq!(locate_function_line(ROUTER, "get_intermediate_output"), 64);
}

#[test]
fn unknown_function() {
    assert_eq!(locate_function_line(ROUTER, "swap_exact_input"), 0);
}
