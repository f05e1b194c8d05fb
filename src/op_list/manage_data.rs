use crate::{
    operation::{self, Operation},
    xdr,
};

impl Operation {
    /// Sets, modifies, or deletes a data entry (name/value pair) that is attached to an account
    ///
    /// Threshold: Medium
    pub fn manage_data(
        &self,
        name: &str,
        data: Option<&Vec<u8>>,
    ) -> Result<xdr::Operation, operation::Error> {
        //

        let data_name = xdr::String64(
            name.try_into()
                .map_err(|_| operation::Error::InvalidField("name".into()))?,
        );
        let data_value: Option<xdr::DataValue> = match data {
            Some(value) => {
                let bytes = value
                    .try_into()
                    .map_err(|_| operation::Error::InvalidField("data".into()))?;
                Some(xdr::DataValue(bytes))
            }
            None => None,
        };

        let body = xdr::OperationBody::ManageData(xdr::ManageDataOp {
            data_name,
            data_value,
        });
        Ok(xdr::Operation {
            source_account: self.source.clone(),
            body,
        })
    }
}
