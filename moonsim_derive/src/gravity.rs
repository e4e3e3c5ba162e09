/// Finds the field `name` of the derived struct, or returns an error naming the derived
/// `trait_name`.
fn struct_field<'a>(
    input: &'a syn::DeriveInput,
    name: &str,
    trait_name: &str,
) -> syn::Result<&'a syn::Field> {
    match &input.data {
        syn::Data::Struct(data_struct) => crate::get_field(name, data_struct).ok_or_else(|| {
            syn::Error::new_spanned(&data_struct.fields, format!("no `{name}` field"))
        }),
        _ => Err(syn::Error::new(
            proc_macro2::Span::call_site(),
            format!("the `{trait_name}` trait can only be derived for struct types"),
        )),
    }
}

/// Adds `field_type: Clone` to the where clause of the derived implementation.
fn require_clone(input: &mut syn::DeriveInput, field_type: &syn::Type) {
    input
        .generics
        .where_clause
        .get_or_insert_with(|| syn::WhereClause {
            where_token: Default::default(),
            predicates: Default::default(),
        })
        .predicates
        .push(syn::parse_quote! {
            #field_type: ::core::clone::Clone
        });
}

pub fn impl_position(input: syn::Result<syn::DeriveInput>) -> syn::Result<proc_macro::TokenStream> {
    let mut input = input?;
    let position_ty = struct_field(&input, "position", "Position")?.ty.clone();

    require_clone(&mut input, &position_ty);

    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();
    let name = &input.ident;

    Ok(quote::quote! {
        impl #impl_generics Position for #name #ty_generics #where_clause {
            type Vector = #position_ty;

            #[inline]
            fn position(&self) -> Self::Vector {
                self.position.clone()
            }
        }
    }
    .into())
}

pub fn impl_mass(input: syn::Result<syn::DeriveInput>) -> syn::Result<proc_macro::TokenStream> {
    let mut input = input?;
    let mass_ty = struct_field(&input, "mass", "Mass")?.ty.clone();

    require_clone(&mut input, &mass_ty);

    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();
    let name = &input.ident;

    Ok(quote::quote! {
        impl #impl_generics Mass for #name #ty_generics #where_clause {
            type Scalar = #mass_ty;

            #[inline]
            fn mass(&self) -> Self::Scalar {
                self.mass.clone()
            }
        }
    }
    .into())
}

pub fn impl_radius(input: syn::Result<syn::DeriveInput>) -> syn::Result<proc_macro::TokenStream> {
    let mut input = input?;
    let radius_ty = struct_field(&input, "radius", "Radius")?.ty.clone();

    require_clone(&mut input, &radius_ty);

    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();
    let name = &input.ident;

    Ok(quote::quote! {
        impl #impl_generics Radius for #name #ty_generics #where_clause {
            type Scalar = #radius_ty;

            #[inline]
            fn radius(&self) -> Self::Scalar {
                self.radius.clone()
            }
        }
    }
    .into())
}
