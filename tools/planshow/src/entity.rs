use clap::ValueEnum;
use planir_proto::{
    DecodeError, DecodeOptions, decode_data_type_with_options, decode_df_schema_with_options,
    decode_expr_with_options, decode_field_with_options, decode_scalar_value_with_options,
    decode_schema_with_options, decode_window_frame_with_options,
};

/// Which wire record a buffer holds. The format is not self-describing, so
/// the caller has to say.
#[derive(Clone, Copy, Debug, ValueEnum)]
#[value(rename_all = "kebab-case")]
pub enum Entity {
    Expr,
    Scalar,
    DataType,
    Field,
    Schema,
    DfSchema,
    WindowFrame,
}

impl Entity {
    /// Decode `buf` as this entity and render it for display. Expressions,
    /// scalars, and frames have a SQL-flavored text form; the rest print
    /// as debug trees.
    pub fn decode_to_text(
        self,
        buf: &[u8],
        opts: &DecodeOptions,
        verbose: bool,
    ) -> Result<String, DecodeError> {
        Ok(match self {
            Entity::Expr => {
                let expr = decode_expr_with_options(buf, opts)?;
                if verbose {
                    format!("{expr}\n{expr:#?}")
                } else {
                    expr.to_string()
                }
            }
            Entity::Scalar => {
                let value = decode_scalar_value_with_options(buf, opts)?;
                if verbose {
                    format!("{value}\n{value:#?}")
                } else {
                    value.to_string()
                }
            }
            Entity::WindowFrame => {
                let frame = decode_window_frame_with_options(buf, opts)?;
                if verbose {
                    format!("{frame}\n{frame:#?}")
                } else {
                    frame.to_string()
                }
            }
            Entity::DataType => format!("{:#?}", decode_data_type_with_options(buf, opts)?),
            Entity::Field => format!("{:#?}", decode_field_with_options(buf, opts)?),
            Entity::Schema => format!("{:#?}", decode_schema_with_options(buf, opts)?),
            Entity::DfSchema => format!("{:#?}", decode_df_schema_with_options(buf, opts)?),
        })
    }

    /// Decode `buf` without rendering, reporting only success or the error.
    pub fn validate(self, buf: &[u8], opts: &DecodeOptions) -> Result<(), DecodeError> {
        match self {
            Entity::Expr => decode_expr_with_options(buf, opts).map(|_| ()),
            Entity::Scalar => decode_scalar_value_with_options(buf, opts).map(|_| ()),
            Entity::DataType => decode_data_type_with_options(buf, opts).map(|_| ()),
            Entity::Field => decode_field_with_options(buf, opts).map(|_| ()),
            Entity::Schema => decode_schema_with_options(buf, opts).map(|_| ()),
            Entity::DfSchema => decode_df_schema_with_options(buf, opts).map(|_| ()),
            Entity::WindowFrame => decode_window_frame_with_options(buf, opts).map(|_| ()),
        }
    }
}
